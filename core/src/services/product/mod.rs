//! Product catalog service module
//!
//! CRUD over products with category resolution: categories are
//! find-or-created by name whenever a write names one.

mod service;

#[cfg(test)]
mod tests;

pub use service::{CreateProduct, ProductService, UpdateProduct};
