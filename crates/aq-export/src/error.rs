//! Error types for aq-export.

use chrono::NaiveDateTime;
use thiserror::Error;

use aq_core::SensorId;
use aq_store::StoreError;

/// Errors that can occur during an export run.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("sensor type {0:?} has no registered field schema")]
    UnknownSchema(String),

    #[error("reading from sensor {sensor} at {timestamp} is missing field {field:?}")]
    MissingField {
        sensor:    SensorId,
        timestamp: NaiveDateTime,
        field:     &'static str,
    },
}

/// Alias for `Result<T, ExportError>`.
pub type ExportResult<T> = Result<T, ExportError>;
