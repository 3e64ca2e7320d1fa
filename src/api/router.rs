use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::customers;
use super::health;
use super::middleware::logging_middleware;
use super::state::AppState;

/// Create the full router with application state.
///
/// Health probes are open; every customer route sits behind the
/// shared-secret gate.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .merge(customers::create_customers_router(state.clone()))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            logging_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
