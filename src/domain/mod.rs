//! Domain layer - Core entities and repository traits

pub mod customer;
pub mod error;

pub use customer::{Customer, CustomerFields, CustomerId, CustomerRepository};
pub use error::DomainError;
