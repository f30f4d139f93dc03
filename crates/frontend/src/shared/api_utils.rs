//! API utilities for talking to the remote catalog REST service
//!
//! Provides URL helpers, the shared error type and JSON request helpers.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Failure of a request to the remote API
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, DNS...)
    #[error("{0}")]
    Network(String),
    /// Response arrived but was not ok
    #[error("HTTP {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
    /// Rejected locally before sending
    #[error("{0}")]
    Invalid(String),
}

/// Build a full API URL from the configured base and a path
///
/// # Example
/// ```ignore
/// let url = api_url("https://api.escuelajs.co/api/v1/", "/products/4");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    let request = Request::put(url)
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    let request = Request::post(url)
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode_body(&body)
}

/// Разбор тела ответа; ошибка содержит строку и колонку от serde_json
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_single_slash() {
        assert_eq!(
            api_url("https://api.escuelajs.co/api/v1/", "/products"),
            "https://api.escuelajs.co/api/v1/products"
        );
        assert_eq!(api_url("http://localhost:3000", "products/4"), "http://localhost:3000/products/4");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Status(404).to_string(), "HTTP 404");
        assert_eq!(ApiError::Invalid("title is required".into()).to_string(), "title is required");
        assert_eq!(ApiError::Decode("eof".into()).to_string(), "invalid response: eof");
    }

    #[test]
    fn test_decode_body() {
        let ids: Vec<i64> = decode_body("[1, 2, 3]").unwrap();
        assert_eq!(ids, vec![1, 2, 3]);

        let err = decode_body::<Vec<i64>>("<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(err.to_string().starts_with("invalid response: "));
    }
}
