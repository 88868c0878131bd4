//! Plain data row written to archive files.

use chrono::NaiveDateTime;

use aq_core::{LocationId, SensorId};

/// One archive row, still typed; the CSV writer renders the fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    pub sensor_id:   SensorId,
    /// Sensor-type name in its original case.
    pub sensor_type: String,
    pub location:    LocationId,
    pub latitude:    Option<f64>,
    pub longitude:   Option<f64>,
    pub timestamp:   NaiveDateTime,
    /// Data columns in schema order, verbatim from the store.
    pub values:      Vec<String>,
}
