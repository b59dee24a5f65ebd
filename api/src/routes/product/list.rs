use actix_web::{web, HttpResponse};

use wb_core::repositories::{CategoryRepository, ProductRepository, UserRepository};

use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

/// Handler for GET /product
///
/// Lists every product with its category attached; an empty catalog yields
/// an empty array.
pub async fn list_products<U, P, C>(state: web::Data<AppState<U, P, C>>) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    C: CategoryRepository + 'static,
{
    match state.product_service.find_all().await {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(error) => handle_domain_error(error),
    }
}
