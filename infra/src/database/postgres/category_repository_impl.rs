//! PostgreSQL implementation of the category repository.

use async_trait::async_trait;
use sqlx::PgPool;

use wb_core::domain::entities::category::Category;
use wb_core::errors::DomainError;
use wb_core::repositories::CategoryRepository;

/// PostgreSQL-backed category repository
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    /// Creates a repository over the given pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            name: row.name,
        }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name FROM categories WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to find category by name: {}", e),
        })?;

        Ok(row.map(Category::from))
    }

    async fn find_or_create(&self, name: &str) -> Result<Category, DomainError> {
        // Single-statement upsert so concurrent callers racing on a new name
        // converge on one row. The no-op DO UPDATE makes RETURNING yield the
        // existing row instead of nothing.
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            INSERT INTO categories (name)
            VALUES ($1)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id, name
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to find or create category: {}", e),
        })?;

        Ok(row.into())
    }
}
