use crate::shared::ReportError;
use serde::{Deserialize, Serialize};

/// Запись отчёта "Costos vs Ganancias" в том виде, как её отдаёт API.
///
/// Числовые поля опциональны: отсутствующее или `null` поле не ломает
/// десериализацию, а отклоняется в [`CostProfitRecord::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostProfitRecord {
    #[serde(alias = "producto_id")]
    pub product_id: i64,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "costo_total")]
    pub total_cost: Option<f64>,
    #[serde(default, alias = "ganancia_total")]
    pub total_profit: Option<f64>,
    #[serde(default, alias = "margen_ganancia")]
    pub profit_margin_percent: Option<f64>,
}

/// Проверенная строка отчёта: все числовые поля присутствуют и конечны
#[derive(Debug, Clone, PartialEq)]
pub struct CostProfitLine {
    pub product_id: i64,
    pub name: String,
    pub total_cost: f64,
    pub total_profit: f64,
    pub profit_margin_percent: f64,
}

impl CostProfitRecord {
    /// `index` - позиция записи во входном списке, попадает в текст ошибки
    pub fn validate(&self, index: usize) -> Result<CostProfitLine, ReportError> {
        Ok(CostProfitLine {
            product_id: self.product_id,
            name: self.name.clone(),
            total_cost: require(self.total_cost, index, "totalCost")?,
            total_profit: require(self.total_profit, index, "totalProfit")?,
            profit_margin_percent: require(
                self.profit_margin_percent,
                index,
                "profitMarginPercent",
            )?,
        })
    }
}

/// Проверяет все записи, порядок сохраняется. Первая ошибка прерывает проверку.
pub fn validate_records(records: &[CostProfitRecord]) -> Result<Vec<CostProfitLine>, ReportError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| record.validate(index))
        .collect()
}

fn require(value: Option<f64>, index: usize, field: &'static str) -> Result<f64, ReportError> {
    match value {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(ReportError::MalformedRecord { index, field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: i64, name: &str, cost: f64, profit: f64, margin: f64) -> CostProfitRecord {
        CostProfitRecord {
            product_id: id,
            name: name.to_string(),
            total_cost: Some(cost),
            total_profit: Some(profit),
            profit_margin_percent: Some(margin),
        }
    }

    #[test]
    fn test_deserialize_camel_case() {
        let parsed: CostProfitRecord = serde_json::from_value(json!({
            "productId": 1,
            "name": "Widget",
            "totalCost": 12.5,
            "totalProfit": 7.333,
            "profitMarginPercent": 36.6665
        }))
        .unwrap();
        assert_eq!(parsed, record(1, "Widget", 12.5, 7.333, 36.6665));
    }

    #[test]
    fn test_deserialize_backend_aliases() {
        let parsed: CostProfitRecord = serde_json::from_value(json!({
            "producto_id": 7,
            "nombre": "Cloro granulado",
            "costo_total": 100.0,
            "ganancia_total": 25.0,
            "margen_ganancia": 20.0
        }))
        .unwrap();
        assert_eq!(parsed, record(7, "Cloro granulado", 100.0, 25.0, 20.0));
    }

    #[test]
    fn test_missing_field_is_none() {
        let parsed: CostProfitRecord = serde_json::from_value(json!({
            "productId": 3,
            "name": "Filtro",
            "totalCost": 10.0,
            "totalProfit": null
        }))
        .unwrap();
        assert_eq!(parsed.total_profit, None);
        assert_eq!(parsed.profit_margin_percent, None);
    }

    #[test]
    fn test_validate_keeps_order() {
        let records = vec![
            record(2, "B", 1.0, 2.0, 3.0),
            record(1, "A", 4.0, 5.0, 6.0),
            record(3, "C", 7.0, 8.0, 9.0),
        ];
        let lines = validate_records(&records).unwrap();
        let ids: Vec<i64> = lines.iter().map(|l| l.product_id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert_eq!(lines[1].total_profit, 5.0);
    }

    #[test]
    fn test_validate_reports_first_malformed_record() {
        let mut broken = record(9, "Bomba", 1.0, 2.0, 3.0);
        broken.total_profit = None;
        let records = vec![record(1, "A", 1.0, 1.0, 1.0), broken];

        assert_eq!(
            validate_records(&records),
            Err(ReportError::MalformedRecord {
                index: 1,
                field: "totalProfit"
            })
        );
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let broken = record(1, "A", f64::NAN, 1.0, 1.0);
        assert_eq!(
            broken.validate(0),
            Err(ReportError::MalformedRecord {
                index: 0,
                field: "totalCost"
            })
        );

        let broken = record(1, "A", 1.0, 1.0, f64::INFINITY);
        assert!(broken.validate(0).is_err());
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(validate_records(&[]), Ok(vec![]));
    }
}
