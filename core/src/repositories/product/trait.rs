//! Product repository trait defining the interface for catalog persistence.

use async_trait::async_trait;

use crate::domain::entities::product::{NewProduct, Product};
use crate::errors::DomainError;

/// Repository trait for Product entity persistence operations
///
/// Products are always returned with their category eagerly attached.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a product by its identifier, category attached
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError>;

    /// Find a product by its exact title, category attached
    ///
    /// Used for the creation-time duplicate check; titles are not unique at
    /// the schema level, so updates may freely reuse an existing title.
    async fn find_by_title(&self, title: &str) -> Result<Option<Product>, DomainError>;

    /// List all products with their categories; an empty store yields an
    /// empty vector, not an error
    async fn find_all(&self) -> Result<Vec<Product>, DomainError>;

    /// Persist a new product; the store assigns the id
    async fn create(&self, product: NewProduct) -> Result<Product, DomainError>;

    /// Overwrite an existing product row with the given state
    ///
    /// # Returns
    /// * `Ok(Product)` - The persisted state
    /// * `Err(DomainError)` - Update failed (e.g. product not found)
    async fn update(&self, product: Product) -> Result<Product, DomainError>;

    /// Delete a product by id
    ///
    /// # Returns
    /// * `Ok(true)` - Product was deleted
    /// * `Ok(false)` - Product not found
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
