//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod quote;
pub mod pagination;
pub mod id;

pub use validation::ValidationError;
pub use quote::{Quote, QuoteAuthor, QuoteDraft, QuoteText, MAX_AUTHOR_LEN, MAX_TEXT_LEN};
pub use pagination::{PaginatedQuery, DEFAULT_LIMIT, MAX_PAGE_SIZE};
pub use id::parse_quote_id;
