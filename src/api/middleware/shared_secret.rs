//! Shared-secret header gate

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::config::AuthConfig;

/// Rejects the request with 401 unless the configured header carries the
/// shared secret. Nothing downstream (body parsing, handlers, storage) runs
/// on rejection.
pub async fn require_shared_secret(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if !is_authorized(request.headers(), &state.auth) {
        debug!(
            header = %state.auth.header,
            path = %request.uri().path(),
            "Rejected request without valid shared secret"
        );
        return ApiError::unauthorized().into_response();
    }

    next.run(request).await
}

/// Exact, constant-time comparison of the header value against the secret
fn is_authorized(headers: &HeaderMap, auth: &AuthConfig) -> bool {
    let Some(value) = headers.get(auth.header.as_str()) else {
        return false;
    };

    bool::from(value.as_bytes().ct_eq(auth.secret.as_bytes()))
}
