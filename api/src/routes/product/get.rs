use actix_web::{web, HttpResponse};

use wb_core::repositories::{CategoryRepository, ProductRepository, UserRepository};

use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

/// Handler for GET /product/{id}
///
/// # Errors
/// - 404 Not Found: unknown id
pub async fn get_product<U, P, C>(
    state: web::Data<AppState<U, P, C>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    C: CategoryRepository + 'static,
{
    match state.product_service.find_one(path.into_inner()).await {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(error) => handle_domain_error(error),
    }
}
