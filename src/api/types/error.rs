//! API error type and status mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::config::StatusMapping;
use crate::domain::DomainError;

/// Legacy reply for a lookup that matched no row; the id is not echoed.
pub const NO_ROWS: &str = "no rows in result set";

/// Error body: `{"error": "<message>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: message.into(),
            },
        }
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Authentication error with the canonical reason phrase
    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized")
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn message(&self) -> &str {
        &self.response.error
    }

    /// Translate a domain error under the given status mapping.
    ///
    /// Storage failures are 500 with the driver message in both mappings.
    /// Under the legacy mapping a missing row is indistinguishable from any
    /// other row-scan failure.
    pub fn from_domain(err: DomainError, mapping: StatusMapping) -> Self {
        let message = err.message().to_string();

        match (mapping, &err) {
            (StatusMapping::Normalized, DomainError::InvalidId { .. }) => {
                Self::bad_request(message)
            }
            (StatusMapping::Normalized, DomainError::NotFound { .. }) => Self::not_found(message),
            (StatusMapping::Legacy, DomainError::NotFound { .. }) => Self::internal(NO_ROWS),
            (StatusMapping::Legacy, DomainError::InvalidId { .. })
            | (_, DomainError::Storage { .. })
            | (_, DomainError::Configuration { .. }) => Self::internal(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status.as_u16(), self.response.error)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::bad_request("Invalid JSON");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Invalid JSON");
    }

    #[test]
    fn test_unauthorized_body() {
        let err = ApiError::unauthorized();
        let json = serde_json::to_value(&err.response).unwrap();

        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(json, serde_json::json!({"error": "Unauthorized"}));
    }

    #[test]
    fn test_legacy_mapping() {
        let not_found = ApiError::from_domain(DomainError::not_found("gone"), StatusMapping::Legacy);
        let bad_id = ApiError::from_domain(DomainError::invalid_id("abc"), StatusMapping::Legacy);

        assert_eq!(not_found.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(not_found.message(), NO_ROWS);
        assert_eq!(bad_id.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(bad_id.message(), "abc");
    }

    #[test]
    fn test_normalized_mapping() {
        let not_found =
            ApiError::from_domain(DomainError::not_found("gone"), StatusMapping::Normalized);
        let bad_id = ApiError::from_domain(DomainError::invalid_id("abc"), StatusMapping::Normalized);

        assert_eq!(not_found.status, StatusCode::NOT_FOUND);
        assert_eq!(not_found.message(), "gone");
        assert_eq!(bad_id.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_storage_is_internal_in_both_mappings() {
        for mapping in [StatusMapping::Legacy, StatusMapping::Normalized] {
            let err = ApiError::from_domain(DomainError::storage("connection refused"), mapping);
            assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.message(), "connection refused");
        }
    }

    #[test]
    fn test_all_error_constructors() {
        assert_eq!(ApiError::bad_request("").status, StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::unauthorized().status, StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::not_found("").status, StatusCode::NOT_FOUND);
        assert_eq!(ApiError::internal("").status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
