//! Quote entity and its validated fields

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Maximum length for quote authors
pub const MAX_AUTHOR_LEN: usize = 200;

/// Maximum length for quote text
pub const MAX_TEXT_LEN: usize = 1000;

/// A stored quote. The id is assigned by the store on creation and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Quote {
    pub id: i64,
    pub author: String,
    pub text: String,
}

impl Quote {
    /// Build a stored quote from an assigned id and validated fields.
    pub fn from_draft(id: i64, draft: QuoteDraft) -> Self {
        Self {
            id,
            author: draft.author.into_string(),
            text: draft.text.into_string(),
        }
    }
}

/// Validated quote author
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuoteAuthor(String);

impl QuoteAuthor {
    /// Create a new author.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - Max 200 characters
    ///
    /// # Example
    /// ```
    /// use quotes_server::models::QuoteAuthor;
    ///
    /// assert!(QuoteAuthor::new("Seneca").is_ok());
    /// assert!(QuoteAuthor::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        bounded("author", s, MAX_AUTHOR_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Validated quote text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteText(String);

impl QuoteText {
    /// Create new quote text (non-empty, max 1000 characters).
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        bounded("text", s, MAX_TEXT_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Author and text of a quote that has not been stored yet, or the
/// replacement values for an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteDraft {
    pub author: QuoteAuthor,
    pub text: QuoteText,
}

impl QuoteDraft {
    /// Validate both fields. The author is checked first.
    pub fn new(author: &str, text: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            author: QuoteAuthor::new(author)?,
            text: QuoteText::new(text)?,
        })
    }
}

fn bounded(field: &'static str, s: &str, max: usize) -> Result<String, ValidationError> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    // Limits are in characters, not bytes
    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(trimmed.to_owned())
}
