//! In-memory quote repository
//!
//! Same contract as the Postgres repository, backed by an ordered map.
//! Used by the HTTP tests and for running the server without a database.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::models::{PaginatedQuery, Quote, QuoteDraft};
use super::{DbError, QuoteRepository};

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    quotes: BTreeMap<i64, Quote>,
}

/// Quote repository held entirely in process memory.
///
/// Ids start at 1 and are never reused, even after a delete.
#[derive(Debug, Default)]
pub struct InMemoryQuoteRepo {
    store: Mutex<Store>,
}

impl InMemoryQuoteRepo {
    pub fn new() -> Self {
        Self::default()
    }

    // The lock is never held across an await, and a panic mid-operation
    // leaves the map consistent, so a poisoned lock is still usable.
    fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl QuoteRepository for InMemoryQuoteRepo {
    async fn create(&self, draft: QuoteDraft) -> Result<Quote, DbError> {
        let mut store = self.store();
        store.last_id += 1;
        let quote = Quote::from_draft(store.last_id, draft);
        store.quotes.insert(quote.id, quote.clone());
        Ok(quote)
    }

    async fn get_by_id(&self, id: i64) -> Result<Quote, DbError> {
        self.store()
            .quotes
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::quote_not_found(id))
    }

    async fn get_by_author(
        &self,
        author: &str,
        page: PaginatedQuery,
    ) -> Result<Vec<Quote>, DbError> {
        let skip = usize::try_from(page.offset()).unwrap_or(usize::MAX);

        Ok(self
            .store()
            .quotes
            .values()
            .filter(|q| author.is_empty() || q.author == author)
            .skip(skip)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, draft: QuoteDraft) -> Result<Quote, DbError> {
        let mut store = self.store();
        let slot = store
            .quotes
            .get_mut(&id)
            .ok_or_else(|| DbError::quote_not_found(id))?;
        *slot = Quote::from_draft(id, draft);
        Ok(slot.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DbError> {
        self.store()
            .quotes
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DbError::quote_not_found(id))
    }
}
