//! CLI module for the customer service
//!
//! Subcommands:
//! - `serve`: run the HTTP API (default)
//! - `init-db`: create the customers table and exit

pub mod init_db;
pub mod serve;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Customer Service - CRUD API over a single customers table
#[derive(Parser)]
#[command(name = "customer-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server (default)
    Serve(serve::ServeArgs),

    /// Ensure the customers table exists, then exit
    InitDb,
}

/// Load `.env`, layered configuration, and install logging
fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    logging::init_logging(&config.logging).context("failed to initialize logging")?;

    Ok(config)
}
