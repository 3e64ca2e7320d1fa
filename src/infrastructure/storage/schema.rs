//! Startup schema initialization

use sqlx::postgres::PgPool;
use tracing::info;

use crate::domain::DomainError;

/// Idempotent DDL for the customers table
pub const CREATE_CUSTOMERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS customers (
        id SERIAL PRIMARY KEY,
        name TEXT,
        email TEXT,
        status TEXT
    )
"#;

/// Ensures the customers table exists.
///
/// Safe to run on every startup against an initialized database.
#[derive(Debug, Clone)]
pub struct SchemaInitializer {
    pool: PgPool,
}

impl SchemaInitializer {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn run(&self) -> Result<(), DomainError> {
        sqlx::query(CREATE_CUSTOMERS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!("Failed to create customers table: {}", e))
            })?;

        info!("Customer schema verified");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ddl_is_idempotent_and_complete() {
        let ddl = CREATE_CUSTOMERS_TABLE.to_uppercase();
        assert!(ddl.contains("CREATE TABLE IF NOT EXISTS CUSTOMERS"));
        assert!(ddl.contains("ID SERIAL PRIMARY KEY"));

        for column in ["NAME TEXT", "EMAIL TEXT", "STATUS TEXT"] {
            assert!(ddl.contains(column), "missing column {}", column);
        }
    }
}
