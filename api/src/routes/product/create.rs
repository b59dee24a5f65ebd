use actix_web::{web, HttpResponse};
use validator::Validate;

use wb_core::repositories::{CategoryRepository, ProductRepository, UserRepository};

use crate::dto::product_dto::CreateProductRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Handler for POST /product
///
/// Creates a product under the named category, creating the category on
/// first use.
///
/// # Errors
/// - 400 Bad Request: validation failure, or a product with the same title
///   already exists
/// - 401 Unauthorized: missing or invalid bearer token
pub async fn create_product<U, P, C>(
    state: web::Data<AppState<U, P, C>>,
    request: web::Json<CreateProductRequest>,
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
        .product_service
        .create(request.into_inner().into())
        .await
    {
        Ok(product) => HttpResponse::Created().json(product),
        Err(error) => handle_domain_error(error),
    }
}
