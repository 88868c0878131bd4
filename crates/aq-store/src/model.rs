//! Entity structs read from the store.
//!
//! All entities pre-exist in the database; the exporter only reads them and
//! never writes back.

use chrono::NaiveDateTime;

use aq_core::{LocationId, SensorId};

/// A physical device identified by id and type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sensor {
    pub id:          SensorId,
    pub sensor_type: SensorType,
}

/// Classification determining which fields a sensor reports.
///
/// `name` keeps the case it was registered with: matching against the
/// supported set is case-insensitive, archive rows carry the original case,
/// file names use the lowercase form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorType {
    pub name: String,
}

/// A sensor placement: possibly geocoded, possibly indoor, possibly the
/// non-physical dummy placeholder excluded from every export.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id:        LocationId,
    pub latitude:  Option<f64>,
    pub longitude: Option<f64>,
    pub indoor:    bool,
}

/// One timestamped observation from a sensor, with its named field values in
/// insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub id:        i64,
    pub timestamp: NaiveDateTime,
    pub location:  Location,
    pub values:    Vec<ReadingValue>,
}

/// A single (field name, value) pair owned by a reading.
///
/// `value` is carried as text verbatim from the store to the archive file.
/// Re-rendering through a float would change the digits downstream consumers
/// see (`10` must not become `10.0`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingValue {
    pub value_type: String,
    pub value:      String,
}
