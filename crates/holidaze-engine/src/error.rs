//! Error types for holidaze-engine operations.
//!
//! These cover malformed input only. A blocked date or an out-of-range guest count is
//! not an error: it is reported as a [`crate::verdict::ValidationVerdict`].

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid date range: end {end} is before start {start}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
