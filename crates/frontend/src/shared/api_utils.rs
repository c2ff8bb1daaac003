//! Общие функции для запросов к backend API

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// GET-запрос с разбором JSON-ответа.
/// Ошибки сети, HTTP-статуса и разбора возвращаются текстом.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {} ({})", response.status(), url));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Путь с query-строкой из сериализуемой структуры
pub fn with_query<Q: serde::Serialize>(path: &str, query: &Q) -> Result<String, String> {
    let query_string =
        serde_qs::to_string(query).map_err(|e| format!("Failed to encode query: {}", e))?;
    if query_string.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, query_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Query {
        meses: u32,
    }

    #[derive(Serialize)]
    struct Empty {}

    #[test]
    fn test_with_query() {
        assert_eq!(
            with_query("/api/reportes/cancelaciones", &Query { meses: 3 }).unwrap(),
            "/api/reportes/cancelaciones?meses=3"
        );
        assert_eq!(with_query("/api/x", &Empty {}).unwrap(), "/api/x");
    }
}
