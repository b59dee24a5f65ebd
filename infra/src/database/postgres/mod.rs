//! PostgreSQL implementations of the core repository traits.

mod category_repository_impl;
mod product_repository_impl;
mod user_repository_impl;

pub use category_repository_impl::PostgresCategoryRepository;
pub use product_repository_impl::PostgresProductRepository;
pub use user_repository_impl::PostgresUserRepository;
