//! Authentication value objects returned by the auth service.

use serde::{Deserialize, Serialize};

/// A freshly issued pair of signed tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token (1 day)
    pub access_token: String,

    /// Longer-lived refresh token (3 days, carries the email claim)
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}

/// Registration result: the persisted identity plus both issued tokens
///
/// The password (hashed or otherwise) is deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: i64,
    pub email: String,
    pub access_token: String,
    pub refresh_token: String,
}
