//! JWT signing configuration module

use serde::{Deserialize, Serialize};

/// Configuration for JWT token issuance
///
/// The signing secret is process-wide and read once at startup; there is no
/// key rotation. Access tokens live for one day, refresh tokens for three.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared HMAC signing secret
    pub secret: String,

    /// Access token lifetime in hours
    pub access_token_expiry_hours: i64,

    /// Refresh token lifetime in days
    pub refresh_token_expiry_days: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-please-change-in-production"),
            access_token_expiry_hours: 24,
            refresh_token_expiry_days: 3,
        }
    }
}

impl JwtConfig {
    /// Create from environment variables
    ///
    /// Reads `JWT_SECRET_KEY`; lifetimes keep their defaults unless
    /// `JWT_ACCESS_EXPIRY_HOURS` / `JWT_REFRESH_EXPIRY_DAYS` are set.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: std::env::var("JWT_SECRET_KEY").unwrap_or(defaults.secret),
            access_token_expiry_hours: std::env::var("JWT_ACCESS_EXPIRY_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_token_expiry_hours),
            refresh_token_expiry_days: std::env::var("JWT_REFRESH_EXPIRY_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_token_expiry_days),
        }
    }

    /// Create a new configuration with an explicit secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }
}
