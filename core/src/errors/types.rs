//! Error type definitions for authentication, token, and catalog operations
//!
//! The variants carry the messages that reach API clients; the presentation
//! layer maps each variant to its HTTP status code.

use thiserror::Error;

/// Authentication-related errors
///
/// These surface as thrown failures: the HTTP boundary catches them and maps
/// them to status-coded bodies (409 conflict, 404 not found, 401 unauthorized).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("User with this email already exists")]
    EmailAlreadyRegistered,

    #[error("User with this email does not exist")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password hashing failed")]
    PasswordHashFailure,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Product catalog errors
///
/// Soft outcomes of catalog operations: the boundary renders them as
/// `{statusCode, message}` bodies rather than generic failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    #[error("Product not found")]
    ProductNotFound,

    #[error("Product already exist")]
    ProductAlreadyExists,
}
