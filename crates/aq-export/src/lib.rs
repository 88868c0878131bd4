//! `aq-export` — per-day, per-sensor CSV archive export.
//!
//! One run walks an inclusive date range and every supported sensor in the
//! store, and writes one semicolon-delimited file per (date, sensor) pair
//! that has qualifying readings:
//!
//! ```text
//! <archive_root>/<date>/<date>_<sensortype>_sensor_<id>.csv
//! ```
//!
//! Readings at the dummy location or at indoor locations never reach the
//! archive, and a reading missing its schema's required field is dropped as
//! incomplete.  Existing files are truncated, so re-running a range fully
//! replaces its output.
//!
//! # Crate layout
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`schema`]   | per-sensor-type field schemas                     |
//! | [`pivot`]    | value-pair pivot into a field map                 |
//! | [`row`]      | `ExportRow` plain data row                        |
//! | [`csv`]      | archive file paths and the CSV writer             |
//! | [`exporter`] | `Exporter::run` — the date × sensor loop          |
//! | [`config`]   | `ExporterConfig` (TOML-loadable)                  |
//! | [`error`]    | `ExportError`, `ExportResult`                     |

pub mod config;
pub mod csv;
pub mod error;
pub mod exporter;
pub mod pivot;
pub mod row;
pub mod schema;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ExporterConfig;
pub use csv::{ArchiveFile, archive_path};
pub use error::{ExportError, ExportResult};
pub use exporter::{Exporter, RunSummary};
pub use pivot::pivot_values;
pub use row::ExportRow;
pub use schema::{FieldSchema, schema_for};
