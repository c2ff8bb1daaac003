use serde::{Deserialize, Serialize};

/// Продажи за один период (день, неделя или месяц)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesPeriodRecord {
    /// Подпись периода, формат зависит от типа периода ("2024-03", "2024-W11", ...)
    #[serde(alias = "periodo")]
    pub period: String,
    #[serde(alias = "total_ventas")]
    pub total_sales: f64,
    #[serde(alias = "cantidad_pedidos")]
    pub order_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_with_aliases() {
        let parsed: Vec<SalesPeriodRecord> = serde_json::from_value(json!([
            { "periodo": "2024-01", "total_ventas": 1500.5, "cantidad_pedidos": 12 },
            { "period": "2024-02", "totalSales": 900.0, "orderCount": 7 }
        ]))
        .unwrap();

        assert_eq!(parsed[0].period, "2024-01");
        assert_eq!(parsed[0].total_sales, 1500.5);
        assert_eq!(parsed[1].order_count, 7);
    }
}
