//! Repository error type and its closed set of kinds

use std::time::Duration;

use crate::models::ValidationError;

/// What went wrong, as seen by callers of the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or out-of-range client input
    Validation,
    /// No matching row
    NotFound,
    /// Backing-store error, timeout or pool exhaustion
    StorageFailure,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{operation} timed out after {}ms", .after.as_millis())]
    Timeout {
        operation: &'static str,
        after: Duration,
    },
}

impl DbError {
    /// Shorthand for a missing quote.
    pub fn quote_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "quote",
            id: id.to_string(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Sqlx(_) | Self::Timeout { .. } => ErrorKind::StorageFailure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(DbError::quote_not_found(3).kind(), ErrorKind::NotFound);
        assert_eq!(
            DbError::from(ValidationError::Empty { field: "author" }).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            DbError::from(sqlx::Error::PoolTimedOut).kind(),
            ErrorKind::StorageFailure
        );
        assert_eq!(
            DbError::Timeout {
                operation: "get_by_id",
                after: Duration::from_secs(10),
            }
            .kind(),
            ErrorKind::StorageFailure
        );
    }

    #[test]
    fn timeout_display() {
        let err = DbError::Timeout {
            operation: "delete",
            after: Duration::from_millis(250),
        };
        assert_eq!(err.to_string(), "delete timed out after 250ms");
    }

    #[test]
    fn not_found_display() {
        assert_eq!(
            DbError::quote_not_found(42).to_string(),
            "not found: quote '42'"
        );
    }
}
