//! Authentication route handlers
//!
//! - `POST /auth/signup`: register a new account
//! - `POST /auth/signin`: authenticate and rotate the access token

pub mod signin;
pub mod signup;
