use actix_web::{web, HttpResponse};

use wb_core::repositories::{CategoryRepository, ProductRepository, UserRepository};

use crate::dto::product_dto::DeleteProductResponse;
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

/// Handler for DELETE /product/{id}
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Product deleted successfully",
///     "statusCode": 200
/// }
/// ```
///
/// ## Errors
/// - 404 Not Found: unknown id
pub async fn delete_product<U, P, C>(
    state: web::Data<AppState<U, P, C>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    C: CategoryRepository + 'static,
{
    match state.product_service.delete(path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(DeleteProductResponse {
            message: "Product deleted successfully".to_string(),
            status_code: 200,
        }),
        Err(error) => handle_domain_error(error),
    }
}
