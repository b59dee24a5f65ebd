//! Configuration modules for the Woobly server

pub mod database;
pub mod jwt;
pub mod server;

pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,

    /// Database pool settings
    pub database: DatabaseConfig,

    /// JWT signing settings
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load the full application configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            jwt: JwtConfig::default(),
        }
    }
}
