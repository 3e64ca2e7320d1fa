//! Application configuration

mod app_config;

pub use app_config::{
    ApiConfig, AppConfig, AuthConfig, DatabaseBackend, DatabaseConfig, LogFormat, LoggingConfig,
    ServerConfig, StatusMapping,
};
