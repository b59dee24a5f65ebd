//! Mapping from domain errors to HTTP responses.
//!
//! Every error leaves the API as a `{statusCode, message}` body whose
//! `statusCode` matches the actual HTTP status of the response.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use validator::ValidationErrors;

use wb_core::errors::{AuthError, DomainError, ProductError};

use crate::dto::error_dto::ErrorResponse;

/// Renders a domain error as its HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let status = match &error {
        DomainError::Auth(auth) => match auth {
            AuthError::EmailAlreadyRegistered => StatusCode::CONFLICT,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::PasswordHashFailure => StatusCode::INTERNAL_SERVER_ERROR,
        },
        DomainError::Product(product) => match product {
            ProductError::ProductNotFound => StatusCode::NOT_FOUND,
            ProductError::ProductAlreadyExists => StatusCode::BAD_REQUEST,
        },
        DomainError::Token(_) => StatusCode::UNAUTHORIZED,
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Database { .. } | DomainError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    HttpResponse::build(status).json(ErrorResponse::new(status.as_u16(), error.to_string()))
}

/// Renders DTO validation failures as a 400 with field details attached
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(
        ErrorResponse::new(400, "Invalid request data")
            .with_details(serde_json::json!(errors)),
    )
}
