//! Domain models shared by the store, the analytics components and the API.

use serde::{Deserialize, Serialize};

/// A single labeled statement as stored in `mental_health_responses`.
///
/// Records are read-only from this system's perspective. `status` may be
/// null or blank in raw data; aggregate operations normalize it with
/// [`normalize_status`] before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MentalHealthResponse {
    pub id: i64,
    pub statement: Option<String>,
    pub clean_statement: Option<String>,
    pub status: Option<String>,
}

/// One row of the grouped count by raw status.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

impl StatusCount {
    pub fn new(status: impl Into<String>, count: i64) -> Self {
        Self {
            status: status.into(),
            count,
        }
    }
}

/// One (status, cleaned text) row fed to the text aggregators.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct StatusText {
    pub status: String,
    pub text: String,
}

impl StatusText {
    pub fn new(status: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            text: text.into(),
        }
    }
}

/// A word and the number of times it occurred within one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub freq: i64,
}

/// Trims a raw status label, returning `None` when nothing is left.
///
/// ```
/// use mindscope_core::models::normalize_status;
///
/// assert_eq!(normalize_status(" Anxiety "), Some("Anxiety"));
/// assert_eq!(normalize_status("   "), None);
/// ```
pub fn normalize_status(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
