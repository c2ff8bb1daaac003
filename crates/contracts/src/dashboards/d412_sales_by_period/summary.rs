use super::dto::SalesPeriodRecord;

/// Направление изменения продаж относительно предыдущего периода
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Increase,
    Decrease,
}

/// Итоги по списку периодов
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SalesSummary {
    pub total_sales: f64,
    pub total_orders: u64,
    /// Изменение последнего периода к предыдущему, %.
    /// `None`, если периодов меньше двух или предыдущий период нулевой.
    pub change_percent: Option<f64>,
}

impl SalesSummary {
    pub fn from_records(records: &[SalesPeriodRecord]) -> Self {
        Self {
            total_sales: records.iter().map(|r| r.total_sales).sum(),
            total_orders: records.iter().map(|r| r.order_count).sum(),
            change_percent: change_percent(records),
        }
    }

    /// Стрелка и модуль изменения. Нулевое изменение не показывается.
    pub fn trend(&self) -> Option<(Trend, f64)> {
        let change = self.change_percent?;
        if change == 0.0 {
            return None;
        }
        let trend = if change >= 0.0 {
            Trend::Increase
        } else {
            Trend::Decrease
        };
        Some((trend, change.abs()))
    }
}

fn change_percent(records: &[SalesPeriodRecord]) -> Option<f64> {
    let [.., previous, current] = records else {
        return None;
    };
    if previous.total_sales == 0.0 {
        return None;
    }
    let change = (current.total_sales - previous.total_sales) / previous.total_sales * 100.0;
    change.is_finite().then_some(change)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(label: &str, sales: f64, orders: u64) -> SalesPeriodRecord {
        SalesPeriodRecord {
            period: label.to_string(),
            total_sales: sales,
            order_count: orders,
        }
    }

    #[test]
    fn test_totals() {
        let records = vec![
            period("2024-01", 100.0, 2),
            period("2024-02", 250.5, 3),
            period("2024-03", 49.5, 1),
        ];
        let summary = SalesSummary::from_records(&records);

        assert_eq!(summary.total_sales, 400.0);
        assert_eq!(summary.total_orders, 6);
    }

    #[test]
    fn test_change_uses_last_two_periods() {
        let records = vec![
            period("2024-01", 10.0, 1),
            period("2024-02", 200.0, 2),
            period("2024-03", 150.0, 2),
        ];
        let summary = SalesSummary::from_records(&records);

        assert_eq!(summary.change_percent, Some(-25.0));
        assert_eq!(summary.trend(), Some((Trend::Decrease, 25.0)));
    }

    #[test]
    fn test_change_increase() {
        let records = vec![period("2024-01", 100.0, 1), period("2024-02", 150.0, 1)];
        let summary = SalesSummary::from_records(&records);

        assert_eq!(summary.trend(), Some((Trend::Increase, 50.0)));
    }

    #[test]
    fn test_no_change_for_single_period() {
        let summary = SalesSummary::from_records(&[period("2024-01", 100.0, 1)]);
        assert_eq!(summary.change_percent, None);
        assert_eq!(summary.trend(), None);
    }

    #[test]
    fn test_no_change_when_previous_is_zero() {
        let records = vec![period("2024-01", 0.0, 0), period("2024-02", 80.0, 1)];
        assert_eq!(SalesSummary::from_records(&records).change_percent, None);
    }

    #[test]
    fn test_zero_change_is_hidden() {
        let records = vec![period("2024-01", 80.0, 1), period("2024-02", 80.0, 1)];
        let summary = SalesSummary::from_records(&records);

        assert_eq!(summary.change_percent, Some(0.0));
        assert_eq!(summary.trend(), None);
    }

    #[test]
    fn test_empty() {
        assert_eq!(SalesSummary::from_records(&[]), SalesSummary::default());
    }
}
