//! Custom JSON extractor that returns errors as JSON

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON extractor that answers every body failure with 400.
///
/// The body is parsed whatever the `Content-Type`; syntax errors, type
/// errors and empty bodies all become `{"error": "..."}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            ApiError::bad_request(format!(
                "Failed to read request body: {}",
                rejection.body_text()
            ))
        })?;

        parse_body(&bytes).map(Json)
    }
}

fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(bytes)
        .map_err(|e| ApiError::bad_request(format!("Invalid JSON: {}", e)))
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct TestStruct {
        name: String,
    }

    #[test]
    fn test_parse_valid_body() {
        let parsed: TestStruct = parse_body(br#"{"name":"Ann"}"#).unwrap();
        assert_eq!(parsed.name, "Ann");
    }

    #[test]
    fn test_syntax_error_is_bad_request() {
        let err = parse_body::<TestStruct>(b"{not json").unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message().starts_with("Invalid JSON"));
    }

    #[test]
    fn test_type_error_is_bad_request() {
        let err = parse_body::<TestStruct>(br#"{"name": 5}"#).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_empty_body_is_bad_request() {
        let err = parse_body::<TestStruct>(b"").unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}
