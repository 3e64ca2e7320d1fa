//! API middleware components

pub mod logging;
pub mod shared_secret;

pub use logging::logging_middleware;
pub use shared_secret::require_shared_secret;
