use actix_web::{web, HttpResponse};
use validator::Validate;

use wb_core::repositories::{CategoryRepository, ProductRepository, UserRepository};

use crate::dto::product_dto::UpdateProductRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Handler for PATCH /product/{id}
///
/// Merges the supplied fields over the stored product. The category is
/// re-resolved only when `categoryName` is present in the body.
///
/// # Errors
/// - 400 Bad Request: validation failure
/// - 404 Not Found: unknown id
pub async fn update_product<U, P, C>(
    state: web::Data<AppState<U, P, C>>,
    path: web::Path<i64>,
    request: web::Json<UpdateProductRequest>,
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
        .update(path.into_inner(), request.into_inner().into())
        .await
    {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(error) => handle_domain_error(error),
    }
}
