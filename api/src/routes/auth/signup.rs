use actix_web::{web, HttpResponse};
use validator::Validate;

use wb_core::repositories::{CategoryRepository, ProductRepository, UserRepository};

use crate::dto::auth_dto::{SignupRequest, SignupResponse, SignupUser};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Handler for POST /auth/signup
///
/// Registers a new account and returns the identity together with its
/// freshly issued token pair.
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "message": "User registered successfully",
///     "user": {
///         "id": 1,
///         "email": "user@example.com",
///         "accessToken": "eyJhbGciOiJIUzI1NiIs...",
///         "refreshToken": "eyJhbGciOiJIUzI1NiIs..."
///     },
///     "statusCode": 201
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: invalid email or empty password
/// - 409 Conflict: email already registered
/// - 500 Internal Server Error: hashing or database failure
pub async fn signup<U, P, C>(
    state: web::Data<AppState<U, P, C>>,
    request: web::Json<SignupRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    C: CategoryRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .auth_service
        .register(&request.email, &request.password)
        .await
    {
        Ok(registered) => HttpResponse::Created().json(SignupResponse {
            message: "User registered successfully".to_string(),
            user: SignupUser {
                id: registered.id,
                email: registered.email,
                access_token: registered.access_token,
                refresh_token: registered.refresh_token,
            },
            status_code: 201,
        }),
        Err(error) => handle_domain_error(error),
    }
}
