//! Error type for `aq-core`.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! into them via `From` impls or wrap it as one variant.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use chrono::NaiveDate;
use thiserror::Error;

/// The top-level error type for `aq-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `aq-core`.
pub type CoreResult<T> = Result<T, CoreError>;
