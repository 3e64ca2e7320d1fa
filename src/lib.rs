//! Customer Service
//!
//! A small HTTP API exposing CRUD over a single `customers` table:
//! - Shared-secret header gate on every customer route
//! - PostgreSQL persistence through one shared connection pool
//! - Idempotent schema initialization at startup
//! - Configurable status mapping for missing rows and bad ids

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use anyhow::Context;
use api::state::AppState;
use config::{DatabaseBackend, StatusMapping};
use domain::CustomerRepository;
use infrastructure::customer::{
    CustomerService, InMemoryCustomerRepository, MissingRowPolicy, PostgresCustomerRepository,
};
use infrastructure::storage::{connect_pool, PostgresConfig, SchemaInitializer};
use sqlx::PgPool;
use tracing::{info, warn};

/// Create the application state from configuration.
///
/// For the PostgreSQL backend this opens the pool and verifies the schema;
/// any failure here is fatal to startup.
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    info!(backend = ?config.database.backend, "Storage backend");

    let repository: Arc<dyn CustomerRepository> = match config.database.backend {
        DatabaseBackend::Postgres => {
            let pool = connect_and_init_schema(config).await?;
            Arc::new(PostgresCustomerRepository::new(pool))
        }
        DatabaseBackend::Memory => {
            warn!("Using in-memory storage; data is lost on restart");
            Arc::new(InMemoryCustomerRepository::new())
        }
    };

    if config.auth.uses_default_secret() {
        warn!("Using the built-in shared secret; set APP__AUTH__SECRET to rotate it");
    }

    let service = CustomerService::new(repository)
        .with_missing_row_policy(missing_row_policy(config.api.status_mapping));

    Ok(AppState::new(
        service,
        config.auth.clone(),
        config.api.status_mapping,
    ))
}

/// Open the pool and run the schema initializer
pub async fn connect_and_init_schema(config: &AppConfig) -> anyhow::Result<PgPool> {
    let pg_config = PostgresConfig::from_database_config(&config.database)?;

    let pool = connect_pool(&pg_config)
        .await
        .context("database connection failed")?;

    SchemaInitializer::new(pool.clone())
        .run()
        .await
        .context("schema initialization failed")?;

    Ok(pool)
}

fn missing_row_policy(mapping: StatusMapping) -> MissingRowPolicy {
    match mapping {
        StatusMapping::Legacy => MissingRowPolicy::Ignore,
        StatusMapping::Normalized => MissingRowPolicy::Report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_row_policy_follows_mapping() {
        assert_eq!(
            missing_row_policy(StatusMapping::Legacy),
            MissingRowPolicy::Ignore
        );
        assert_eq!(
            missing_row_policy(StatusMapping::Normalized),
            MissingRowPolicy::Report
        );
    }

    #[tokio::test]
    async fn test_memory_backend_state() {
        let mut config = AppConfig::default();
        config.database.backend = DatabaseBackend::Memory;
        config.api.status_mapping = StatusMapping::Normalized;

        let state = create_app_state_with_config(&config).await.unwrap();

        assert_eq!(state.status_mapping, StatusMapping::Normalized);
        assert_eq!(
            state.customer_service.missing_row_policy(),
            MissingRowPolicy::Report
        );
        assert!(state.customer_service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_postgres_backend_without_url_fails() {
        let mut config = AppConfig::default();
        config.database.url = Some(String::new());

        // Only meaningful when the environment does not provide a URL.
        if std::env::var("DATABASE_URL").is_err() {
            assert!(create_app_state_with_config(&config).await.is_err());
        }
    }
}
