//! Category repository trait for find-or-create reconciliation.

use async_trait::async_trait;

use crate::domain::entities::category::Category;
use crate::errors::DomainError;

/// Repository trait for Category entity persistence operations
///
/// Categories are keyed by unique name and created lazily; they are never
/// updated or deleted through this interface.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find a category by its exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError>;

    /// Look up a category by name, creating it when absent
    ///
    /// Implementations must make this atomic with respect to concurrent
    /// callers: two requests racing on a brand-new name must converge on a
    /// single row (the Postgres implementation uses an upsert).
    async fn find_or_create(&self, name: &str) -> Result<Category, DomainError>;
}
