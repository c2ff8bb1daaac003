use serde::{Deserialize, Serialize};

/// Покупатель и количество его покупок
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCustomer {
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "compras")]
    pub purchases: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_with_aliases() {
        let parsed: Vec<TopCustomer> = serde_json::from_value(json!([
            { "nombre": "Ana", "compras": 9 },
            { "name": "Luis", "purchases": 4 }
        ]))
        .unwrap();

        assert_eq!(parsed[0].name, "Ana");
        assert_eq!(parsed[0].purchases, 9);
        assert_eq!(parsed[1].purchases, 4);
    }
}
