use actix_web::{web, HttpResponse};
use validator::Validate;

use wb_core::repositories::{CategoryRepository, ProductRepository, UserRepository};

use crate::dto::auth_dto::{SigninRequest, SigninResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Handler for POST /auth/signin
///
/// Authenticates an existing account. A fresh access token is issued and
/// stored; the refresh token from signup is left as is.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "User logged in successfully",
///     "accessToken": "eyJhbGciOiJIUzI1NiIs...",
///     "statusCode": 200
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: invalid email or empty password
/// - 401 Unauthorized: wrong password
/// - 404 Not Found: no account with that email
pub async fn signin<U, P, C>(
    state: web::Data<AppState<U, P, C>>,
    request: web::Json<SigninRequest>,
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
        .login(&request.email, &request.password)
        .await
    {
        Ok(user) => {
            let access_token = user.access_token.unwrap_or_default();
            HttpResponse::Ok().json(SigninResponse {
                message: "User logged in successfully".to_string(),
                access_token,
                status_code: 200,
            })
        }
        Err(error) => handle_domain_error(error),
    }
}
