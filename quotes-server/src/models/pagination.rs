//! Limit/offset pagination for list endpoints

use std::collections::HashMap;

use super::ValidationError;

/// Maximum items per page unless configured otherwise
pub const MAX_PAGE_SIZE: u32 = 100;

/// Default items per page
pub const DEFAULT_LIMIT: u32 = 10;

/// Bounded page window handed to the repository.
///
/// Only constructed through validation, so `limit` is always in
/// `1..=max` and `offset` always fits a signed 64-bit SQL parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginatedQuery {
    limit: u32,
    offset: u64,
}

impl PaginatedQuery {
    /// Create a page window with validation.
    pub fn new(limit: u32, offset: u64, max_limit: u32) -> Result<Self, ValidationError> {
        Self::checked(i64::from(limit), offset.try_into().unwrap_or(-1), max_limit)
    }

    /// Merge raw request parameters over `default` and validate the result.
    ///
    /// Absent or empty `limit`/`offset` fall back to the default. Anything
    /// that is not an integer, a `limit` outside `1..=max_limit`, or a
    /// negative `offset` is rejected.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    /// use quotes_server::models::{PaginatedQuery, MAX_PAGE_SIZE};
    ///
    /// let raw = HashMap::from([("limit".to_string(), "5".to_string())]);
    /// let page = PaginatedQuery::resolve(&raw, PaginatedQuery::default(), MAX_PAGE_SIZE).unwrap();
    /// assert_eq!((page.limit(), page.offset()), (5, 0));
    /// ```
    pub fn resolve(
        raw: &HashMap<String, String>,
        default: PaginatedQuery,
        max_limit: u32,
    ) -> Result<Self, ValidationError> {
        let limit = match param(raw, "limit") {
            Some(value) => parse_int("limit", value)?,
            None => i64::from(default.limit),
        };
        let offset = match param(raw, "offset") {
            Some(value) => parse_int("offset", value)?,
            None => default.offset as i64,
        };

        Self::checked(limit, offset, max_limit)
    }

    fn checked(limit: i64, offset: i64, max_limit: u32) -> Result<Self, ValidationError> {
        if limit < 1 || limit > i64::from(max_limit) {
            return Err(ValidationError::OutOfRange {
                field: "limit",
                min: 1,
                max: i64::from(max_limit),
            });
        }

        if offset < 0 {
            return Err(ValidationError::OutOfRange {
                field: "offset",
                min: 0,
                max: i64::MAX,
            });
        }

        Ok(Self {
            limit: limit as u32,
            offset: offset as u64,
        })
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Get OFFSET value.
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

impl Default for PaginatedQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

fn param<'a>(raw: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    raw.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

fn parse_int(field: &'static str, value: &str) -> Result<i64, ValidationError> {
    value.parse::<i64>().map_err(|_| ValidationError::InvalidFormat {
        field,
        reason: "must be an integer",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn resolve(pairs: &[(&str, &str)]) -> Result<PaginatedQuery, ValidationError> {
        PaginatedQuery::resolve(&raw(pairs), PaginatedQuery::default(), MAX_PAGE_SIZE)
    }

    #[test]
    fn missing_params_use_default() {
        let page = resolve(&[]).unwrap();
        assert_eq!(page.limit(), 10);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn empty_params_use_default() {
        let page = resolve(&[("limit", ""), ("offset", "")]).unwrap();
        assert_eq!(page, PaginatedQuery::default());
    }

    #[test]
    fn explicit_values() {
        let page = resolve(&[("limit", "25"), ("offset", "50")]).unwrap();
        assert_eq!(page.limit(), 25);
        assert_eq!(page.offset(), 50);
    }

    #[test]
    fn unrelated_params_ignored() {
        let page = resolve(&[("author", "Seneca"), ("offset", "3")]).unwrap();
        assert_eq!(page.limit(), 10);
        assert_eq!(page.offset(), 3);
    }

    #[test]
    fn rejects_zero_and_negative_limit() {
        for value in ["0", "-1"] {
            let err = resolve(&[("limit", value)]).unwrap_err();
            assert!(matches!(err, ValidationError::OutOfRange { field: "limit", .. }));
        }
    }

    #[test]
    fn rejects_limit_above_max() {
        assert!(resolve(&[("limit", "100")]).is_ok());

        let err = resolve(&[("limit", "101")]).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange { field: "limit", max: 100, .. }
        ));
    }

    #[test]
    fn respects_configured_max() {
        let err = PaginatedQuery::resolve(&raw(&[("limit", "30")]), PaginatedQuery::default(), 20)
            .unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { max: 20, .. }));
    }

    #[test]
    fn rejects_negative_offset() {
        let err = resolve(&[("offset", "-5")]).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "offset", .. }));
    }

    #[test]
    fn rejects_non_integers() {
        for (key, value) in [("limit", "ten"), ("limit", "1.5"), ("offset", "0x10")] {
            let err = resolve(&[(key, value)]).unwrap_err();
            assert!(matches!(err, ValidationError::InvalidFormat { .. }), "{key}={value}");
        }
    }

    #[test]
    fn rejects_overflowing_integer() {
        let err = resolve(&[("offset", "99999999999999999999")]).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { field: "offset", .. }));
    }

    #[test]
    fn new_validates() {
        assert!(PaginatedQuery::new(1, 0, MAX_PAGE_SIZE).is_ok());
        assert!(PaginatedQuery::new(0, 0, MAX_PAGE_SIZE).is_err());
        assert!(PaginatedQuery::new(10, u64::MAX, MAX_PAGE_SIZE).is_err());
    }
}
