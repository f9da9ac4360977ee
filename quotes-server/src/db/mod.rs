//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - Connection pool with an explicit ceiling - no Arc<Mutex<Connection>>
//! - Every query bounded by a timeout; no retries
//! - Storage details never leak past the repository

pub mod error;
pub mod pool;
pub mod repos;

pub use error::{DbError, ErrorKind};
pub use pool::create_pool;
pub use repos::*;
