//! Quote identity parsing

use super::ValidationError;

/// Parse a raw path segment into a quote id.
///
/// Malformed input is a validation failure, never a not-found: the caller
/// must be able to tell "bad id" apart from "no such quote". Well-formed ids
/// that were never assigned (0, negatives) parse fine and are left for the
/// repository to report as missing.
pub fn parse_quote_id(raw: &str) -> Result<i64, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::Empty { field: "id" });
    }

    raw.parse::<i64>().map_err(|_| ValidationError::InvalidFormat {
        field: "id",
        reason: "must be a 64-bit integer",
    })
}
