//! Repository interfaces for data persistence.
//!
//! Each repository has an async trait defining the persistence contract and
//! an in-memory mock used by service tests and API integration tests.

pub mod category;
pub mod product;
pub mod user;

pub use category::{CategoryRepository, MockCategoryRepository};
pub use product::{MockProductRepository, ProductRepository};
pub use user::{MockUserRepository, UserRepository};
