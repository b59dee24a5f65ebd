//! Business services containing domain logic and use cases.

pub mod auth;
pub mod product;
pub mod token;

// Re-export commonly used types
pub use auth::AuthService;
pub use product::{CreateProduct, ProductService, UpdateProduct};
pub use token::{TokenConfig, TokenService};
