use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Продажи товара по месяцам.
/// Ключ - месяц ("2024-01"), набор ключей у разных товаров может отличаться.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalRecord {
    #[serde(alias = "nombre_producto")]
    pub product_name: String,
    /// `None` и `null`-значения при нормализации превращаются в 0
    #[serde(default, alias = "ventas_por_mes")]
    pub sales_by_month: Option<BTreeMap<String, Option<f64>>>,
}

impl SeasonalRecord {
    /// Продажи за месяц; отсутствующий ключ, `null` и NaN дают 0
    pub fn sales_for(&self, month_key: &str) -> f64 {
        self.sales_by_month
            .as_ref()
            .and_then(|sales| sales.get(month_key).copied().flatten())
            .filter(|value| !value.is_nan())
            .unwrap_or(0.0)
    }

    pub fn month_keys(&self) -> impl Iterator<Item = &str> {
        self.sales_by_month
            .iter()
            .flat_map(|sales| sales.keys().map(String::as_str))
    }
}
