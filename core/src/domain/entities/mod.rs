//! Domain entities representing core business objects.

pub mod category;
pub mod product;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use category::Category;
pub use product::{NewProduct, Product};
pub use token::{Claims, ACCESS_TOKEN_EXPIRY_HOURS, REFRESH_TOKEN_EXPIRY_DAYS};
pub use user::{NewUser, User};
