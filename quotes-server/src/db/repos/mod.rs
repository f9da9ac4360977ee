//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Bound parameters only, never string-built SQL
//! - Deterministic ordering for anything paginated
//! - Affected-row checks on writes; zero rows is NotFound

pub mod quotes;
pub mod memory;

pub use super::error::{DbError, ErrorKind};
pub use quotes::{bounded, PgQuoteRepo, QuoteRepository, QUERY_TIMEOUT};
pub use memory::InMemoryQuoteRepo;
