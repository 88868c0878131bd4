//! Error types for aq-store.

use thiserror::Error;

/// Errors that can occur while reading from the store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("bad timestamp in store: {0}")]
    BadTimestamp(String),
}

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;
