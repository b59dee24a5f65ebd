//! User entity representing a registered account in the Woobly system.

use serde::{Deserialize, Serialize};

/// User entity representing a registered account
///
/// The password hash is never serialized outward; token fields hold the most
/// recently issued credentials and are replaced on login (access token) or
/// registration (both).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Database-assigned identifier
    pub id: i64,

    /// Unique email address
    pub email: String,

    /// Bcrypt hash of the user's password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Most recently issued access token
    pub access_token: Option<String>,

    /// Most recently issued refresh token
    pub refresh_token: Option<String>,
}

impl User {
    /// Replaces the stored access token after a successful login
    pub fn set_access_token(&mut self, token: String) {
        self.access_token = Some(token);
    }
}

/// Input record for creating a user; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl NewUser {
    /// Creates a new user record with freshly issued tokens
    pub fn new(
        email: String,
        password_hash: String,
        access_token: String,
        refresh_token: String,
    ) -> Self {
        Self {
            email,
            password_hash,
            access_token: Some(access_token),
            refresh_token: Some(refresh_token),
        }
    }
}
