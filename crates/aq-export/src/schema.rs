//! Per-sensor-type field schemas.
//!
//! The archive row layout is fixed per sensor type: a reading must carry the
//! schema's required field to be exported at all, and the data columns are
//! the schema's fields in order.  Only the PPD42NS particulate sensor is
//! registered; supporting another type means adding its entry to [`SCHEMAS`]
//! and listing the type in the exporter configuration.

/// Column prefix shared by every archive file, before the per-type fields.
const FIXED_COLUMNS: [&str; 6] =
    ["sensor_id", "sensor_type", "location", "lat", "lon", "timestamp"];

/// Column layout for one sensor type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    /// Sensor-type name, lowercase.
    pub type_name: &'static str,
    /// Field whose absence marks a reading as incomplete.
    pub required:  &'static str,
    /// Data columns, in archive order.
    pub fields:    &'static [&'static str],
}

impl FieldSchema {
    /// The archive header record: fixed columns then the data columns.
    pub fn header(&self) -> Vec<&'static str> {
        let mut columns = FIXED_COLUMNS.to_vec();
        columns.extend_from_slice(self.fields);
        columns
    }
}

/// Registered schemas.
const SCHEMAS: &[FieldSchema] = &[FieldSchema {
    type_name: "ppd42ns",
    required:  "P1",
    fields:    &["P1", "durP1", "ratioP1", "P2", "durP2", "ratioP2"],
}];

/// Look up the schema for a sensor-type name, case-insensitively.
pub fn schema_for(type_name: &str) -> Option<&'static FieldSchema> {
    SCHEMAS.iter().find(|s| s.type_name.eq_ignore_ascii_case(type_name))
}
