//! SQLite connection and queries.
//!
//! # Schema
//!
//! | Table            | Columns                                         |
//! |------------------|-------------------------------------------------|
//! | `sensor_types`   | `id`, `name`                                    |
//! | `sensors`        | `id`, `sensor_type_id`                          |
//! | `locations`      | `id`, `latitude`, `longitude`, `indoor`         |
//! | `readings`       | `id`, `sensor_id`, `location_id`, `timestamp`   |
//! | `reading_values` | `id`, `reading_id`, `value_type`, `value`       |
//!
//! `readings.timestamp` is ISO-8601 TEXT (`YYYY-MM-DDTHH:MM:SS`), so
//! lexicographic order equals chronological order and a calendar-date filter
//! is a prefix match.  `reading_values.value` is TEXT and flows to the
//! archive verbatim.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, params};

use aq_core::dates::TIMESTAMP_FORMAT;
use aq_core::{LocationId, SensorId};

use crate::model::{Location, Reading, ReadingValue, Sensor, SensorType};
use crate::{StoreError, StoreResult};

/// Handle to the reading store.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open an existing database file.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;",
        )?;
        Ok(Self { conn })
    }

    /// In-memory store, used by tests and fixtures.
    pub fn open_in_memory() -> StoreResult<Self> {
        Ok(Self { conn: Connection::open_in_memory()? })
    }

    /// Create the tables if they do not exist.  Idempotent.
    pub fn init_schema(&self) -> StoreResult<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS sensor_types (
                 id   INTEGER PRIMARY KEY,
                 name TEXT NOT NULL UNIQUE
             );
             CREATE TABLE IF NOT EXISTS sensors (
                 id             INTEGER PRIMARY KEY,
                 sensor_type_id INTEGER NOT NULL REFERENCES sensor_types(id)
             );
             CREATE TABLE IF NOT EXISTS locations (
                 id        INTEGER PRIMARY KEY,
                 latitude  REAL,
                 longitude REAL,
                 indoor    INTEGER NOT NULL DEFAULT 0
             );
             CREATE TABLE IF NOT EXISTS readings (
                 id          INTEGER PRIMARY KEY,
                 sensor_id   INTEGER NOT NULL REFERENCES sensors(id),
                 location_id INTEGER NOT NULL REFERENCES locations(id),
                 timestamp   TEXT NOT NULL
             );
             CREATE INDEX IF NOT EXISTS idx_readings_sensor_timestamp
                 ON readings(sensor_id, timestamp);
             CREATE TABLE IF NOT EXISTS reading_values (
                 id         INTEGER PRIMARY KEY,
                 reading_id INTEGER NOT NULL REFERENCES readings(id),
                 value_type TEXT NOT NULL,
                 value      TEXT NOT NULL
             );
             CREATE INDEX IF NOT EXISTS idx_reading_values_reading
                 ON reading_values(reading_id);",
        )?;
        Ok(())
    }

    // ── Export queries ────────────────────────────────────────────────────

    /// Every registered sensor with its type name, ascending by id.
    pub fn sensors(&self) -> StoreResult<Vec<Sensor>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT s.id, t.name
             FROM sensors s
             JOIN sensor_types t ON t.id = s.sensor_type_id
             ORDER BY s.id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Sensor {
                id:          SensorId(row.get(0)?),
                sensor_type: SensorType { name: row.get(1)? },
            })
        })?;

        let mut sensors = Vec::new();
        for row in rows {
            sensors.push(row?);
        }
        Ok(sensors)
    }

    /// All readings for `sensor` whose calendar date equals `day`, excluding
    /// the dummy location and indoor locations, ascending by timestamp.
    ///
    /// Each reading carries its location and its value pairs in insertion
    /// order.
    pub fn readings_for_day(
        &self,
        sensor: SensorId,
        day:    NaiveDate,
        dummy:  LocationId,
    ) -> StoreResult<Vec<Reading>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT r.id, r.timestamp, l.id, l.latitude, l.longitude, l.indoor
             FROM readings r
             JOIN locations l ON l.id = r.location_id
             WHERE r.sensor_id = ?1
               AND substr(r.timestamp, 1, 10) = ?2
               AND l.id <> ?3
               AND l.indoor = 0
             ORDER BY r.timestamp",
        )?;
        let rows = stmt.query_map(
            params![i64::from(sensor), day.to_string(), i64::from(dummy)],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, u32>(2)?,
                    row.get::<_, Option<f64>>(3)?,
                    row.get::<_, Option<f64>>(4)?,
                    row.get::<_, bool>(5)?,
                ))
            },
        )?;

        let mut values_stmt = self.conn.prepare_cached(
            "SELECT value_type, value
             FROM reading_values
             WHERE reading_id = ?1
             ORDER BY id",
        )?;

        let mut readings = Vec::new();
        for row in rows {
            let (id, raw_timestamp, location_id, latitude, longitude, indoor) = row?;
            let timestamp = NaiveDateTime::parse_from_str(&raw_timestamp, TIMESTAMP_FORMAT)
                .map_err(|e| StoreError::BadTimestamp(format!("{raw_timestamp}: {e}")))?;

            let values = values_stmt
                .query_map(params![id], |r| {
                    Ok(ReadingValue { value_type: r.get(0)?, value: r.get(1)? })
                })?
                .collect::<Result<Vec<_>, _>>()?;

            readings.push(Reading {
                id,
                timestamp,
                location: Location {
                    id: LocationId(location_id),
                    latitude,
                    longitude,
                    indoor,
                },
                values,
            });
        }
        Ok(readings)
    }

    // ── Fixture/seeding helpers ───────────────────────────────────────────
    //
    // The exporter never calls these; they exist for tests and for the
    // seeding tools that populate an archive database by hand.

    /// Insert a sensor type, returning its row id.
    pub fn insert_sensor_type(&self, name: &str) -> StoreResult<i64> {
        self.conn.execute(
            "INSERT INTO sensor_types (name) VALUES (?1)",
            params![name],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert a sensor with an explicit id.
    pub fn insert_sensor(&self, id: SensorId, sensor_type_id: i64) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO sensors (id, sensor_type_id) VALUES (?1, ?2)",
            params![i64::from(id), sensor_type_id],
        )?;
        Ok(())
    }

    /// Insert a location with an explicit id.
    pub fn insert_location(
        &self,
        id:        LocationId,
        latitude:  Option<f64>,
        longitude: Option<f64>,
        indoor:    bool,
    ) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO locations (id, latitude, longitude, indoor) VALUES (?1, ?2, ?3, ?4)",
            params![i64::from(id), latitude, longitude, indoor],
        )?;
        Ok(())
    }

    /// Insert a reading, returning its row id.
    pub fn insert_reading(
        &self,
        sensor:    SensorId,
        location:  LocationId,
        timestamp: NaiveDateTime,
    ) -> StoreResult<i64> {
        self.conn.execute(
            "INSERT INTO readings (sensor_id, location_id, timestamp) VALUES (?1, ?2, ?3)",
            params![
                i64::from(sensor),
                i64::from(location),
                timestamp.format(TIMESTAMP_FORMAT).to_string(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert one (field name, value) pair for a reading.
    pub fn insert_reading_value(
        &self,
        reading_id: i64,
        value_type: &str,
        value:      &str,
    ) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO reading_values (reading_id, value_type, value) VALUES (?1, ?2, ?3)",
            params![reading_id, value_type, value],
        )?;
        Ok(())
    }
}
