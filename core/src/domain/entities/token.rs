//! JWT claims carried by issued tokens.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Access token lifetime (1 day)
pub const ACCESS_TOKEN_EXPIRY_HOURS: i64 = 24;

/// Refresh token lifetime (3 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 3;

/// Claims payload for both token kinds
///
/// Access tokens carry no identifying claim beyond issuance; refresh tokens
/// additionally embed the user's email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,

    /// Issued-at timestamp (seconds since epoch)
    pub iat: i64,

    /// Email address, present on refresh tokens only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Claims {
    /// Creates claims for an access token expiring after `expiry_hours`
    pub fn new_access_token(expiry_hours: i64) -> Self {
        let now = Utc::now();
        Self {
            exp: (now + Duration::hours(expiry_hours)).timestamp(),
            iat: now.timestamp(),
            email: None,
        }
    }

    /// Creates claims for a refresh token embedding the user's email
    pub fn new_refresh_token(email: String, expiry_days: i64) -> Self {
        let now = Utc::now();
        Self {
            exp: (now + Duration::days(expiry_days)).timestamp(),
            iat: now.timestamp(),
            email: Some(email),
        }
    }

    /// Whether the claims are past their expiration
    pub fn is_expired(&self) -> bool {
        self.exp < Utc::now().timestamp()
    }
}
