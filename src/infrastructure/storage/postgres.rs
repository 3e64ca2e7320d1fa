//! PostgreSQL connection pooling

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::domain::DomainError;

/// PostgreSQL pool configuration
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// How long a request waits for a free connection, in seconds
    pub acquire_timeout_secs: u64,
}

impl PostgresConfig {
    /// Build from application config; fails when no URL is configured
    pub fn from_database_config(config: &DatabaseConfig) -> Result<Self, DomainError> {
        let url = config.resolve_url().ok_or_else(|| {
            DomainError::configuration(
                "database URL is required (set DATABASE_URL or APP__DATABASE__URL)",
            )
        })?;

        Ok(Self {
            url,
            max_connections: config.max_connections,
            min_connections: config.min_connections.min(config.max_connections),
            acquire_timeout_secs: config.acquire_timeout_secs,
        })
    }
}

/// Open the shared connection pool.
///
/// The pool is built once at startup; repositories borrow a connection per
/// statement and sqlx returns it on every exit path.
pub async fn connect_pool(config: &PostgresConfig) -> Result<PgPool, DomainError> {
    info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Connecting to PostgreSQL"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))?;

    info!("PostgreSQL connection established");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_database_config_copies_pool_settings() {
        let database = DatabaseConfig {
            url: Some("postgres://localhost/customers".to_string()),
            max_connections: 20,
            min_connections: 5,
            acquire_timeout_secs: 60,
            ..Default::default()
        };

        let config = PostgresConfig::from_database_config(&database).unwrap();
        assert_eq!(config.url, "postgres://localhost/customers");
        assert_eq!(config.max_connections, 20);
        assert_eq!(config.min_connections, 5);
        assert_eq!(config.acquire_timeout_secs, 60);
    }

    #[test]
    fn test_from_database_config_clamps_min_connections() {
        let database = DatabaseConfig {
            url: Some("postgres://localhost/test".to_string()),
            max_connections: 2,
            min_connections: 8,
            ..Default::default()
        };

        let config = PostgresConfig::from_database_config(&database).unwrap();
        assert_eq!(config.url, "postgres://localhost/test");
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.min_connections, 2);
    }
}
