//! # Woobly Infrastructure
//!
//! Infrastructure layer implementing the persistence interfaces declared in
//! `wb_core` against PostgreSQL, plus the connection pool plumbing.

pub mod database;

// Re-export commonly used types
pub use database::connection::{create_pool, ping, DatabasePool};
pub use database::postgres::{
    PostgresCategoryRepository, PostgresProductRepository, PostgresUserRepository,
};
