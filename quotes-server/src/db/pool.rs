//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The pool is the only
//! shared mutable resource in the service; it bounds the number of
//! simultaneous in-flight queries.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Create a PostgreSQL connection pool.
///
/// Opens one connection eagerly so a bad URL or unreachable server fails
/// at startup rather than on the first request.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DatabaseConfig::default()).await?;
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!(
        max_connections = config.max_connections,
        idle_timeout_secs = config.idle_timeout_secs,
        "connecting to database"
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .idle_timeout(config.idle_timeout())
        .acquire_timeout(config.acquire_timeout())
        .connect(&config.url)
        .await
}
