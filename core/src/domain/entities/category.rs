//! Category entity shared by products.

use serde::{Deserialize, Serialize};

/// Product category, keyed by unique name
///
/// Categories are created lazily the first time a product operation
/// references a name that is not yet present; they are never updated or
/// deleted, and may outlive the products that referenced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Database-assigned identifier
    pub id: i64,

    /// Unique category name
    pub name: String,
}
