//! Quote repository
//!
//! Every operation:
//! - uses bound parameters only (author, text, id, limit, offset)
//! - runs under its own timeout, independent of the caller
//! - reports zero affected rows on update/delete as NotFound
//!
//! A timed-out query future is dropped, which hands its connection back
//! to the pool. There is no retry; the caller decides.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};

use crate::models::{PaginatedQuery, Quote, QuoteDraft};
use super::DbError;

/// Default budget for a single repository operation
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Storage capability for quotes.
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    /// Insert a quote and return it with its assigned id.
    async fn create(&self, draft: QuoteDraft) -> Result<Quote, DbError>;

    /// Fetch a quote by id.
    async fn get_by_id(&self, id: i64) -> Result<Quote, DbError>;

    /// List quotes ordered by ascending id.
    ///
    /// An empty `author` lists across all authors; anything else is an
    /// exact match. No match is an empty vec, not an error.
    async fn get_by_author(
        &self,
        author: &str,
        page: PaginatedQuery,
    ) -> Result<Vec<Quote>, DbError>;

    /// Replace author and text of an existing quote.
    async fn update(&self, id: i64, draft: QuoteDraft) -> Result<Quote, DbError>;

    /// Remove a quote.
    async fn delete(&self, id: i64) -> Result<(), DbError>;
}

/// Run a storage future under `timeout`, mapping expiry to a storage error.
pub async fn bounded<T, F>(timeout: Duration, operation: &'static str, fut: F) -> Result<T, DbError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result.map_err(DbError::from),
        Err(_) => {
            tracing::warn!(operation, timeout_ms = timeout.as_millis() as u64, "query timed out");
            Err(DbError::Timeout {
                operation,
                after: timeout,
            })
        }
    }
}

/// Postgres-backed quote repository
#[derive(Debug, Clone)]
pub struct PgQuoteRepo {
    pool: PgPool,
    timeout: Duration,
}

impl PgQuoteRepo {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            timeout: QUERY_TIMEOUT,
        }
    }

    /// Override the per-operation timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl QuoteRepository for PgQuoteRepo {
    async fn create(&self, draft: QuoteDraft) -> Result<Quote, DbError> {
        let quote: Quote = bounded(
            self.timeout,
            "create",
            sqlx::query_as(
                r#"
                INSERT INTO quotes (author, text)
                VALUES ($1, $2)
                RETURNING id, author, text
                "#,
            )
            .bind(draft.author.as_str())
            .bind(draft.text.as_str())
            .fetch_one(&self.pool),
        )
        .await?;

        tracing::debug!(id = quote.id, "quote inserted");
        Ok(quote)
    }

    async fn get_by_id(&self, id: i64) -> Result<Quote, DbError> {
        bounded(
            self.timeout,
            "get_by_id",
            sqlx::query_as::<_, Quote>("SELECT id, author, text FROM quotes WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await?
        .ok_or_else(|| DbError::quote_not_found(id))
    }

    async fn get_by_author(
        &self,
        author: &str,
        page: PaginatedQuery,
    ) -> Result<Vec<Quote>, DbError> {
        tracing::debug!(author, limit = page.limit(), offset = page.offset(), "listing quotes");

        let query: QueryAs<'_, Postgres, Quote, PgArguments> = if author.is_empty() {
            sqlx::query_as(
                r#"
                SELECT id, author, text
                FROM quotes
                ORDER BY id ASC
                LIMIT $1 OFFSET $2
                "#,
            )
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
        } else {
            sqlx::query_as(
                r#"
                SELECT id, author, text
                FROM quotes
                WHERE author = $1
                ORDER BY id ASC
                LIMIT $2 OFFSET $3
                "#,
            )
            .bind(author)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
        };

        bounded(self.timeout, "get_by_author", query.fetch_all(&self.pool)).await
    }

    async fn update(&self, id: i64, draft: QuoteDraft) -> Result<Quote, DbError> {
        // RETURNING yields no row when nothing matched
        let quote: Option<Quote> = bounded(
            self.timeout,
            "update",
            sqlx::query_as(
                r#"
                UPDATE quotes
                SET author = $1, text = $2
                WHERE id = $3
                RETURNING id, author, text
                "#,
            )
            .bind(draft.author.as_str())
            .bind(draft.text.as_str())
            .bind(id)
            .fetch_optional(&self.pool),
        )
        .await?;

        quote.ok_or_else(|| DbError::quote_not_found(id))
    }

    async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = bounded(
            self.timeout,
            "delete",
            sqlx::query("DELETE FROM quotes WHERE id = $1")
                .bind(id)
                .execute(&self.pool),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::quote_not_found(id));
        }

        Ok(())
    }
}
