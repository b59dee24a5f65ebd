//! PostgreSQL implementation of the product repository.

use async_trait::async_trait;
use sqlx::PgPool;

use wb_core::domain::entities::category::Category;
use wb_core::domain::entities::product::{NewProduct, Product};
use wb_core::errors::DomainError;
use wb_core::repositories::ProductRepository;

/// PostgreSQL-backed product repository
///
/// Every read joins the category row so products always come back with
/// their category attached.
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    /// Creates a repository over the given pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Joined row shape for `products` with its category
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    title: String,
    description: String,
    price: f64,
    category_id: i64,
    category_name: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            title: row.title,
            description: row.description,
            price: row.price,
            category: Category {
                id: row.category_id,
                name: row.category_name,
            },
        }
    }
}

const SELECT_JOINED: &str = r#"
    SELECT p.id, p.title, p.description, p.price,
           c.id AS category_id, c.name AS category_name
    FROM products p
    INNER JOIN categories c ON c.id = p.category_id
"#;

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!("{} WHERE p.id = $1", SELECT_JOINED))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find product by id: {}", e),
            })?;

        Ok(row.map(Product::from))
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Product>, DomainError> {
        let row =
            sqlx::query_as::<_, ProductRow>(&format!("{} WHERE p.title = $1", SELECT_JOINED))
                .bind(title)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to find product by title: {}", e),
                })?;

        Ok(row.map(Product::from))
    }

    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let rows =
            sqlx::query_as::<_, ProductRow>(&format!("{} ORDER BY p.id", SELECT_JOINED))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to list products: {}", e),
                })?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn create(&self, product: NewProduct) -> Result<Product, DomainError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO products (title, description, price, category_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&product.title)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to create product: {}", e),
        })?;

        self.find_by_id(id).await?.ok_or(DomainError::Database {
            message: "Inserted product row vanished before re-read".to_string(),
        })
    }

    async fn update(&self, product: Product) -> Result<Product, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET title = $2,
                description = $3,
                price = $4,
                category_id = $5
            WHERE id = $1
            "#,
        )
        .bind(product.id)
        .bind(&product.title)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.category.id)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to update product: {}", e),
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Product".to_string(),
            });
        }

        self.find_by_id(product.id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "Product".to_string(),
            })
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete product: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
