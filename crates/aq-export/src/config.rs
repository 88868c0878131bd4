//! Exporter configuration.
//!
//! Loaded from a TOML file by the CLI, or constructed with `Default`, which
//! matches the historical deployment: `archive/` root, PPD42NS sensors only,
//! dummy location 11 excluded.
//!
//! ```toml
//! archive_root           = "/var/lib/aq/archive"
//! supported_sensor_types = ["ppd42ns"]
//! dummy_location_id      = 11
//! strict_fields          = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use aq_core::LocationId;

use crate::ExportResult;

/// Settings for one export run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExporterConfig {
    /// Base directory dated export subdirectories are created under.
    pub archive_root: PathBuf,

    /// Sensor-type names to export.  Matched case-insensitively; every
    /// listed name must have a registered field schema.
    pub supported_sensor_types: Vec<String>,

    /// Placeholder location excluded from every export.
    pub dummy_location_id: LocationId,

    /// When `true`, a reading that passes the required-field gate but lacks
    /// one of the remaining schema fields aborts the run with
    /// [`crate::ExportError::MissingField`].  When `false` the reading is
    /// dropped like an incomplete one.
    pub strict_fields: bool,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            archive_root:           PathBuf::from("archive"),
            supported_sensor_types: vec!["ppd42ns".to_string()],
            dummy_location_id:      LocationId(11),
            strict_fields:          true,
        }
    }
}

impl ExporterConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> ExportResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// `true` if `name` is one of the supported sensor types.
    pub fn supports(&self, name: &str) -> bool {
        self.supported_sensor_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(name))
    }
}
