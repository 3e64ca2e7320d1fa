//! Customer resource endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::get,
    Router,
};
use tracing::debug;

use crate::api::middleware::require_shared_secret;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, MessageResponse};
use crate::domain::customer::{Customer, CustomerFields, CustomerId};

pub const CUSTOMER_DELETED: &str = "customer deleted";

/// Customer routes, all behind the shared-secret gate
pub fn create_customers_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/customers", get(list_customers).post(create_customer))
        .route(
            "/customers/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .route_layer(middleware::from_fn_with_state(state, require_shared_secret))
}

/// POST /customers
pub async fn create_customer(
    State(state): State<AppState>,
    Json(fields): Json<CustomerFields>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    debug!(name = %fields.name, "Creating customer");

    let customer = state
        .customer_service
        .create(fields)
        .await
        .map_err(|e| state.api_error(e))?;

    Ok((StatusCode::CREATED, Json(customer)))
}

/// GET /customers/{id}
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    let id = CustomerId::parse(&id).map_err(|e| state.api_error(e))?;

    let customer = state
        .customer_service
        .get(id)
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(customer))
}

/// GET /customers
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    let customers = state
        .customer_service
        .list()
        .await
        .map_err(|e| state.api_error(e))?;

    debug!(count = customers.len(), "Listed customers");
    Ok(Json(customers))
}

/// PUT /customers/{id}
///
/// The id is checked before the body so a bad id wins over a bad body.
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<CustomerFields>, ApiError>,
) -> Result<Json<Customer>, ApiError> {
    let id = CustomerId::parse(&id).map_err(|e| state.api_error(e))?;
    let Json(fields) = body?;

    let customer = state
        .customer_service
        .update(id, fields)
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(customer))
}

/// DELETE /customers/{id}
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = CustomerId::parse(&id).map_err(|e| state.api_error(e))?;

    state
        .customer_service
        .delete(id)
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(MessageResponse::new(CUSTOMER_DELETED)))
}
