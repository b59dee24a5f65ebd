//! Authentication request and response DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for POST /auth/signup
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// Request body for POST /auth/signin
#[derive(Debug, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// The registered identity echoed back on signup
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupUser {
    pub id: i64,
    pub email: String,
    pub access_token: String,
    pub refresh_token: String,
}

/// Response body for a successful signup (201)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub message: String,
    pub user: SignupUser,
    pub status_code: u16,
}

/// Response body for a successful signin (200)
///
/// Only the fresh access token is returned; the refresh token issued at
/// signup stays valid and is not repeated here.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SigninResponse {
    pub message: String,
    pub access_token: String,
    pub status_code: u16,
}
