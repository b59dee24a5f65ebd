//! Route handlers grouped by resource.

pub mod auth;
pub mod product;

use std::sync::Arc;

use wb_core::repositories::{CategoryRepository, ProductRepository, UserRepository};
use wb_core::services::auth::AuthService;
use wb_core::services::product::ProductService;

/// Shared application state injected into every handler
///
/// Generic over the repository implementations so tests can assemble the
/// app on mocks while production wires the Postgres repositories.
pub struct AppState<U, P, C>
where
    U: UserRepository,
    P: ProductRepository,
    C: CategoryRepository,
{
    pub auth_service: Arc<AuthService<U>>,
    pub product_service: Arc<ProductService<P, C>>,
}
