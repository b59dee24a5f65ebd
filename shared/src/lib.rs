//! Shared configuration types for the Woobly server
//!
//! This crate provides the configuration structs used across all server
//! crates: HTTP server settings, database pool settings, and JWT signing
//! settings. Each struct can be built from environment variables or
//! assembled programmatically with the builder-style helpers.

pub mod config;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, JwtConfig, ServerConfig};
