//! Application state for shared services

use std::sync::Arc;

use crate::api::types::ApiError;
use crate::config::{AuthConfig, StatusMapping};
use crate::domain::DomainError;
use crate::infrastructure::customer::CustomerService;

/// Application state shared by every request.
///
/// Everything here is immutable after startup; the connection pool lives
/// behind the customer service's repository.
#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<CustomerService>,
    pub auth: Arc<AuthConfig>,
    pub status_mapping: StatusMapping,
}

impl AppState {
    pub fn new(
        customer_service: CustomerService,
        auth: AuthConfig,
        status_mapping: StatusMapping,
    ) -> Self {
        Self {
            customer_service: Arc::new(customer_service),
            auth: Arc::new(auth),
            status_mapping,
        }
    }

    /// Translate a domain error using the configured status mapping
    pub fn api_error(&self, err: DomainError) -> ApiError {
        ApiError::from_domain(err, self.status_mapping)
    }
}
