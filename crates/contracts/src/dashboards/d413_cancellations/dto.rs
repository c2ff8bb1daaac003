use serde::{Deserialize, Serialize};

/// Метрики отмен заказов за последние N месяцев
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancellationMetrics {
    #[serde(alias = "total_pedidos")]
    pub total_orders: u64,
    #[serde(alias = "pedidos_cancelados")]
    pub cancelled_orders: u64,
    #[serde(alias = "porcentaje_cancelados")]
    pub cancelled_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_with_aliases() {
        let parsed: CancellationMetrics = serde_json::from_value(json!({
            "total_pedidos": 40,
            "pedidos_cancelados": 3,
            "porcentaje_cancelados": 7.5
        }))
        .unwrap();

        assert_eq!(
            parsed,
            CancellationMetrics {
                total_orders: 40,
                cancelled_orders: 3,
                cancelled_percent: 7.5,
            }
        );
    }
}
