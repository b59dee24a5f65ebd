//! Mock implementation of ProductRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::category::Category;
use crate::domain::entities::product::{NewProduct, Product};
use crate::errors::DomainError;

use super::trait_::ProductRepository;

/// Mock product repository for testing
///
/// Holds a side table of categories so that created products come back with
/// their category attached, matching the eager-load behavior of the real
/// store. Delete calls are counted so tests can assert that no delete is
/// issued for missing ids.
pub struct MockProductRepository {
    products: Arc<RwLock<HashMap<i64, Product>>>,
    categories: Arc<RwLock<HashMap<i64, Category>>>,
    next_id: AtomicI64,
    delete_calls: AtomicUsize,
}

impl MockProductRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
            categories: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
            delete_calls: AtomicUsize::new(0),
        }
    }

    /// Register a category so `create` can attach it by id
    pub async fn insert_category(&self, category: Category) {
        self.categories
            .write()
            .await
            .insert(category.id, category);
    }

    /// Number of stored products
    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    /// How many times `delete` has been invoked
    pub fn delete_call_count(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Product>, DomainError> {
        let products = self.products.read().await;
        Ok(products.values().find(|p| p.title == title).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let products = self.products.read().await;
        let mut all: Vec<Product> = products.values().cloned().collect();
        all.sort_by_key(|p| p.id);
        Ok(all)
    }

    async fn create(&self, product: NewProduct) -> Result<Product, DomainError> {
        let category = self
            .categories
            .read()
            .await
            .get(&product.category_id)
            .cloned()
            .ok_or_else(|| DomainError::Database {
                message: format!("Unknown category id: {}", product.category_id),
            })?;

        let created = Product {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: product.title,
            description: product.description,
            price: product.price,
            category,
        };
        self.products.write().await.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, product: Product) -> Result<Product, DomainError> {
        let mut products = self.products.write().await;

        if !products.contains_key(&product.id) {
            return Err(DomainError::NotFound {
                resource: "Product".to_string(),
            });
        }

        products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        let mut products = self.products.write().await;
        Ok(products.remove(&id).is_some())
    }
}
