//! Customer domain
//!
//! The single entity of the service and the repository trait used to
//! persist it.

mod entity;
mod repository;

pub use entity::{Customer, CustomerFields, CustomerId};
pub use repository::CustomerRepository;

#[cfg(test)]
pub use repository::MockCustomerRepository;
