//! quotes-server: HTTP repository service for quotes
//!
//! Layers, leaf first:
//! - [`models`]: validated quote fields, pagination resolver, id parsing
//! - [`db`]: connection pool and the [`db::QuoteRepository`] capability
//!   with a Postgres and an in-memory implementation
//! - [`http`]: axum router, extractors, error mapping, server lifecycle
//! - [`config`]: TOML-backed settings resolved once at startup

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::QuotesConfig;
pub use db::{DbError, ErrorKind, QuoteRepository};
pub use models::{PaginatedQuery, Quote, QuoteDraft};
