//! Init-db command - runs the schema initializer and exits

use tracing::{error, info};

use crate::config::DatabaseBackend;

/// Create the customers table if it does not exist
pub async fn run() -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    if config.database.backend == DatabaseBackend::Memory {
        info!("In-memory backend configured; nothing to initialize");
        return Ok(());
    }

    match crate::connect_and_init_schema(&config).await {
        Ok(pool) => {
            pool.close().await;
            info!("Database initialized");
            Ok(())
        }
        Err(e) => {
            error!(error = %format!("{:#}", e), "Database initialization failed");
            Err(e)
        }
    }
}
