//! PostgreSQL connection pool management.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;
use wb_shared::config::DatabaseConfig;

/// Alias so callers don't depend on the concrete driver type directly
pub type DatabasePool = PgPool;

/// Creates a connection pool from the given configuration
///
/// Connects eagerly; a bad URL or unreachable server fails here rather than
/// on the first query.
pub async fn create_pool(config: &DatabaseConfig) -> Result<DatabasePool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .max_lifetime(Duration::from_secs(config.max_lifetime))
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "database connection pool established"
    );
    Ok(pool)
}

/// Round-trips a trivial query to verify the pool is usable
pub async fn ping(pool: &DatabasePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
