//! Storage infrastructure - connection pool and schema setup

mod postgres;
mod schema;

pub use postgres::{connect_pool, PostgresConfig};
pub use schema::{SchemaInitializer, CREATE_CUSTOMERS_TABLE};
