//! Строки таблицы "Costos vs Ganancias"

use crate::shared::components::table::{format_currency, format_percent};
use contracts::dashboards::d410_cost_profit::dto::{validate_records, CostProfitRecord};
use contracts::shared::ReportError;

/// Готовая к отображению строка: все числа уже отформатированы
#[derive(Debug, Clone, PartialEq)]
pub struct CostProfitRow {
    pub product_id: i64,
    pub name: String,
    pub total_cost: String,
    pub total_profit: String,
    pub profit_margin: String,
}

/// Одна строка на запись, порядок входа сохраняется.
/// Некорректная запись даёт ошибку вместо частично заполненной таблицы.
pub fn build_rows(records: &[CostProfitRecord]) -> Result<Vec<CostProfitRow>, ReportError> {
    let lines = validate_records(records)?;
    Ok(lines
        .into_iter()
        .map(|line| CostProfitRow {
            product_id: line.product_id,
            name: line.name,
            total_cost: format_currency(line.total_cost),
            total_profit: format_currency(line.total_profit),
            profit_margin: format_percent(line.profit_margin_percent),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_widget_row() {
        let rows = build_rows(&[record(1, "Widget", 12.5, 7.333, 36.6665)]).unwrap();
        assert_eq!(
            rows,
            vec![CostProfitRow {
                product_id: 1,
                name: "Widget".to_string(),
                total_cost: "$12.50".to_string(),
                total_profit: "$7.33".to_string(),
                profit_margin: "36.67%".to_string(),
            }]
        );
    }

    #[test]
    fn test_row_count_and_order() {
        let records: Vec<CostProfitRecord> = (0..5)
            .rev()
            .map(|i| record(i, &format!("P{}", i), i as f64, 1.0, 2.0))
            .collect();
        let rows = build_rows(&records).unwrap();

        assert_eq!(rows.len(), records.len());
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["P4", "P3", "P2", "P1", "P0"]);
        assert_eq!(rows[0].total_cost, "$4.00");
    }

    #[test]
    fn test_rebuild_is_identical() {
        let records = vec![record(1, "A", 1.005, 2.0, 3.0), record(2, "B", 4.0, 5.0, 6.0)];
        assert_eq!(build_rows(&records), build_rows(&records));
    }

    #[test]
    fn test_malformed_record_is_reported() {
        let mut broken = record(2, "B", 4.0, 5.0, 6.0);
        broken.profit_margin_percent = None;
        let result = build_rows(&[record(1, "A", 1.0, 2.0, 3.0), broken]);

        assert_eq!(
            result,
            Err(ReportError::MalformedRecord {
                index: 1,
                field: "profitMarginPercent"
            })
        );
    }

    #[test]
    fn test_rows_from_backend_payload() {
        let records: Vec<CostProfitRecord> = serde_json::from_value(serde_json::json!([
            {
                "producto_id": 7,
                "nombre": "Gorra",
                "costo_total": 100.0,
                "ganancia_total": 25.5,
                "margen_ganancia": 20.315
            }
        ]))
        .unwrap();
        let rows = build_rows(&records).unwrap();

        assert_eq!(rows[0].name, "Gorra");
        assert_eq!(rows[0].total_cost, "$100.00");
        assert_eq!(rows[0].total_profit, "$25.50");
    }
}
