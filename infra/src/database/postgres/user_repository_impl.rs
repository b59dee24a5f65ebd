//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use sqlx::PgPool;

use wb_core::domain::entities::user::{NewUser, User};
use wb_core::errors::{AuthError, DomainError};
use wb_core::repositories::UserRepository;

/// PostgreSQL-backed user repository
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a repository over the given pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape for the `users` table
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password_hash: String,
    access_token: Option<String>,
    refresh_token: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            access_token: row.access_token,
            refresh_token: row.refresh_token,
        }
    }
}

// Postgres error code for unique constraint violations
const UNIQUE_VIOLATION: &str = "23505";

fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .and_then(|db| db.code())
        .map(|code| code == UNIQUE_VIOLATION)
        .unwrap_or(false)
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, access_token, refresh_token
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to find user by email: {}", e),
        })?;

        Ok(row.map(User::from))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to check user existence: {}", e),
                })?;

        Ok(exists)
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (email, password_hash, access_token, refresh_token)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, password_hash, access_token, refresh_token
            "#,
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.access_token)
        .bind(&user.refresh_token)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // The service checks first, but two concurrent signups can still
            // race on the unique email constraint.
            if is_unique_violation(&e) {
                DomainError::Auth(AuthError::EmailAlreadyRegistered)
            } else {
                DomainError::Database {
                    message: format!("Failed to create user: {}", e),
                }
            }
        })?;

        Ok(row.into())
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET email = $2,
                password_hash = $3,
                access_token = $4,
                refresh_token = $5
            WHERE id = $1
            RETURNING id, email, password_hash, access_token, refresh_token
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.access_token)
        .bind(&user.refresh_token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to update user: {}", e),
        })?;

        row.map(User::from).ok_or(DomainError::NotFound {
            resource: "User".to_string(),
        })
    }
}
