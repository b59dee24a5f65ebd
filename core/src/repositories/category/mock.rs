//! Mock implementation of CategoryRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::category::Category;
use crate::errors::DomainError;

use super::trait_::CategoryRepository;

/// Mock category repository for testing
///
/// `find_or_create` runs under a single write lock, mirroring the atomicity
/// of the real upsert.
pub struct MockCategoryRepository {
    categories: Arc<RwLock<HashMap<i64, Category>>>,
    next_id: AtomicI64,
}

impl MockCategoryRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            categories: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored categories
    pub async fn len(&self) -> usize {
        self.categories.read().await.len()
    }
}

impl Default for MockCategoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategoryRepository for MockCategoryRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError> {
        let categories = self.categories.read().await;
        Ok(categories.values().find(|c| c.name == name).cloned())
    }

    async fn find_or_create(&self, name: &str) -> Result<Category, DomainError> {
        let mut categories = self.categories.write().await;

        if let Some(existing) = categories.values().find(|c| c.name == name) {
            return Ok(existing.clone());
        }

        let created = Category {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: name.to_string(),
        };
        categories.insert(created.id, created.clone());
        Ok(created)
    }
}
