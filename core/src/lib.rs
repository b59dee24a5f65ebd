//! # Woobly Core
//!
//! Core business logic and domain layer for the Woobly backend.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types that form the foundation of the application
//! architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Category, Claims, NewProduct, NewUser, Product, User};
pub use domain::value_objects::{RegisteredUser, TokenPair};
pub use errors::{AuthError, DomainError, DomainResult, ProductError, TokenError};
pub use repositories::{
    CategoryRepository, MockCategoryRepository, MockProductRepository, MockUserRepository,
    ProductRepository, UserRepository,
};
pub use services::{AuthService, ProductService, TokenConfig, TokenService};
