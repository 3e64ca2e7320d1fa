//! Customer infrastructure implementations

mod in_memory;
mod postgres_repository;
mod service;

pub use in_memory::InMemoryCustomerRepository;
pub use postgres_repository::PostgresCustomerRepository;
pub use service::{CustomerService, MissingRowPolicy};
