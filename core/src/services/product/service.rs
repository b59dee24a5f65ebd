//! Product catalog use cases.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::product::{NewProduct, Product};
use crate::errors::{DomainResult, ProductError};
use crate::repositories::{CategoryRepository, ProductRepository};

/// Input for creating a product, and for full replacement where every
/// field is overwritten
#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category_name: String,
}

/// Partial update input; absent fields keep their stored value
#[derive(Debug, Clone, Default)]
pub struct UpdateProduct {
    pub title: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub category_name: Option<String>,
}

/// Product catalog service
///
/// Generic over both repositories so the mocks drive unit tests and the
/// Postgres implementations back the running server.
pub struct ProductService<P: ProductRepository, C: CategoryRepository> {
    product_repository: Arc<P>,
    category_repository: Arc<C>,
}

impl<P: ProductRepository, C: CategoryRepository> ProductService<P, C> {
    /// Creates a new product service
    pub fn new(product_repository: Arc<P>, category_repository: Arc<C>) -> Self {
        Self {
            product_repository,
            category_repository,
        }
    }

    /// Creates a product under the named category
    ///
    /// The duplicate-title check runs before category resolution, so a
    /// rejected create never inserts a category row.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::ProductAlreadyExists`] when a product with
    /// the same title exists.
    pub async fn create(&self, input: CreateProduct) -> DomainResult<Product> {
        if self
            .product_repository
            .find_by_title(&input.title)
            .await?
            .is_some()
        {
            debug!(title = %input.title, "create rejected, title taken");
            return Err(ProductError::ProductAlreadyExists.into());
        }

        let category = self
            .category_repository
            .find_or_create(&input.category_name)
            .await?;

        let product = self
            .product_repository
            .create(NewProduct {
                title: input.title,
                description: input.description,
                price: input.price,
                category_id: category.id,
            })
            .await?;

        info!(product_id = product.id, "product created");
        Ok(product)
    }

    /// Lists every product with its category eagerly loaded
    pub async fn find_all(&self) -> DomainResult<Vec<Product>> {
        self.product_repository.find_all().await
    }

    /// Fetches a single product by id
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::ProductNotFound`] when the id is unknown.
    pub async fn find_one(&self, id: i64) -> DomainResult<Product> {
        self.product_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProductError::ProductNotFound.into())
    }

    /// Partially updates a product, merging supplied fields over stored ones
    ///
    /// The category is re-resolved only when `category_name` is supplied;
    /// otherwise the product keeps its current category.
    pub async fn update(&self, id: i64, fields: UpdateProduct) -> DomainResult<Product> {
        let existing = self.find_one(id).await?;

        let category = match fields.category_name {
            Some(name) => self.category_repository.find_or_create(&name).await?,
            None => existing.category,
        };

        let merged = Product {
            id: existing.id,
            title: fields.title.unwrap_or(existing.title),
            description: fields.description.unwrap_or(existing.description),
            price: fields.price.unwrap_or(existing.price),
            category,
        };

        let product = self.product_repository.update(merged).await?;
        info!(product_id = product.id, "product updated");
        Ok(product)
    }

    /// Fully replaces a product; only the id survives
    pub async fn replace(&self, id: i64, input: CreateProduct) -> DomainResult<Product> {
        let existing = self.find_one(id).await?;

        let category = self
            .category_repository
            .find_or_create(&input.category_name)
            .await?;

        let replacement = Product {
            id: existing.id,
            title: input.title,
            description: input.description,
            price: input.price,
            category,
        };

        let product = self.product_repository.update(replacement).await?;
        info!(product_id = product.id, "product replaced");
        Ok(product)
    }

    /// Deletes a product by id
    ///
    /// Existence is checked first; an unknown id reaches the repository's
    /// delete not at all.
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        self.find_one(id).await?;
        self.product_repository.delete(id).await?;
        info!(product_id = id, "product deleted");
        Ok(())
    }
}
