//! Validation error types

use std::fmt;

/// Validation error for client-supplied input.
///
/// Always detected before any storage access and always reported as a
/// client error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length (in characters)
    TooLong { field: &'static str, max: usize },

    /// Value doesn't parse (e.g., non-numeric id)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Numeric value outside the accepted range
    OutOfRange { field: &'static str, min: i64, max: i64 },

    /// Request body could not be decoded
    InvalidPayload { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::OutOfRange { field, min, max } => {
                write!(f, "{} must be between {} and {}", field, min, max)
            }
            Self::InvalidPayload { reason } => write!(f, "invalid request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "author",
            max: 200,
        };
        assert_eq!(
            err.to_string(),
            "author exceeds maximum length of 200 characters"
        );
    }

    #[test]
    fn out_of_range_display() {
        let err = ValidationError::OutOfRange {
            field: "limit",
            min: 1,
            max: 100,
        };
        assert_eq!(err.to_string(), "limit must be between 1 and 100");
    }
}
