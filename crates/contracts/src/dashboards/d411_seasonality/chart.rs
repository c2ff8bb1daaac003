//! Подготовка данных графика сезонности
//!
//! 1. Собираем все ключи месяцев, встречающиеся хотя бы у одного товара.
//! 2. Сортируем их лексикографически.
//! 3. Для каждого товара строим точку, где у каждого месяца есть значение
//!    (отсутствующие месяцы = 0).
//! 4. Одна линия на месяц, одна категория оси X на товар.

use super::dto::SeasonalRecord;
use crate::shared::palette::month_color;
use std::collections::{BTreeMap, BTreeSet};

/// Нормализованные продажи одного товара
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalPoint {
    pub product_name: String,
    /// Содержит ровно ключи из [`SeasonalChartData::months`]
    pub sales: BTreeMap<String, f64>,
}

/// Линия графика: продажи одного месяца по всем товарам
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSeries {
    pub month: String,
    pub label: String,
    pub color: &'static str,
    /// Значения в порядке товаров
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeasonalChartData {
    pub months: Vec<String>,
    pub points: Vec<SeasonalPoint>,
}

impl SeasonalChartData {
    pub fn from_records(records: &[SeasonalRecord]) -> Self {
        let months: Vec<String> = records
            .iter()
            .flat_map(SeasonalRecord::month_keys)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();

        let points = records
            .iter()
            .map(|record| SeasonalPoint {
                product_name: record.product_name.clone(),
                sales: months
                    .iter()
                    .map(|month| (month.clone(), record.sales_for(month)))
                    .collect(),
            })
            .collect();

        Self { months, points }
    }

    /// Подписи оси X - названия товаров
    pub fn categories(&self) -> Vec<String> {
        self.points
            .iter()
            .map(|point| point.product_name.clone())
            .collect()
    }

    pub fn series(&self) -> Vec<MonthSeries> {
        self.months
            .iter()
            .map(|month| MonthSeries {
                month: month.clone(),
                label: format!("Ventas {}", month),
                color: month_color(month),
                values: self
                    .points
                    .iter()
                    .map(|point| point.sales.get(month).copied().unwrap_or(0.0))
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, sales: &[(&str, f64)]) -> SeasonalRecord {
        SeasonalRecord {
            product_name: name.to_string(),
            sales_by_month: Some(
                sales
                    .iter()
                    .map(|(month, value)| (month.to_string(), Some(*value)))
                    .collect(),
            ),
        }
    }

    #[test]
    fn test_months_are_sorted_union() {
        let records = vec![
            record("Cloro", &[("2024-02", 12.0)]),
            record("Filtro", &[("2024-03", 4.0), ("2024-01", 3.0)]),
        ];
        let chart = SeasonalChartData::from_records(&records);

        assert_eq!(chart.months, vec!["2024-01", "2024-02", "2024-03"]);
    }

    #[test]
    fn test_points_are_zero_filled() {
        let records = vec![
            record("Cloro", &[("2024-02", 12.0)]),
            record("Filtro", &[("2024-01", 3.0), ("2024-03", 4.0)]),
        ];
        let chart = SeasonalChartData::from_records(&records);

        let first: Vec<(&str, f64)> = chart.points[0]
            .sales
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect();
        assert_eq!(
            first,
            vec![("2024-01", 0.0), ("2024-02", 12.0), ("2024-03", 0.0)]
        );
        for point in &chart.points {
            assert_eq!(point.sales.len(), chart.months.len());
        }
    }

    #[test]
    fn test_series_one_per_month() {
        let records = vec![
            record("Cloro", &[("2024-02", 12.0)]),
            record("Filtro", &[("2024-01", 3.0), ("2024-02", 1.5)]),
        ];
        let chart = SeasonalChartData::from_records(&records);
        let series = chart.series();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].month, "2024-01");
        assert_eq!(series[0].label, "Ventas 2024-01");
        assert_eq!(series[0].values, vec![0.0, 3.0]);
        assert_eq!(series[1].values, vec![12.0, 1.5]);
        assert_eq!(chart.categories(), vec!["Cloro", "Filtro"]);
    }

    #[test]
    fn test_record_without_sales_map() {
        let records = vec![
            SeasonalRecord {
                product_name: "Vacío".to_string(),
                sales_by_month: None,
            },
            record("Cloro", &[("2024-05", 2.0)]),
        ];
        let chart = SeasonalChartData::from_records(&records);

        assert_eq!(chart.months, vec!["2024-05"]);
        assert_eq!(chart.points[0].sales.get("2024-05"), Some(&0.0));
    }

    #[test]
    fn test_rebuild_is_identical() {
        let records = vec![
            record("Cloro", &[("2024-02", 12.0), ("2024-04", 1.0)]),
            record("Filtro", &[("2024-01", 3.0)]),
        ];
        let first = SeasonalChartData::from_records(&records);
        let second = SeasonalChartData::from_records(&records);

        assert_eq!(first, second);
        assert_eq!(first.series(), second.series());
    }

    #[test]
    fn test_empty_input() {
        let chart = SeasonalChartData::from_records(&[]);
        assert!(chart.points.is_empty());
        assert!(chart.months.is_empty());
        assert!(chart.series().is_empty());
    }
}
