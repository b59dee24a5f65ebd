//! Token service module for JWT management
//!
//! This module handles token issuance and verification:
//! - Access tokens: no identifying claims, 1-day expiry
//! - Refresh tokens: email claim, 3-day expiry
//!
//! The service is stateless; the signing key is process-wide configuration
//! read once at startup.

mod config;
mod service;


pub use config::TokenConfig;
pub use service::TokenService;
