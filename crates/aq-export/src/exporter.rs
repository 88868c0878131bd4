//! The export run loop.
//!
//! Sequential over dates × sensors, single-threaded, synchronous I/O: the
//! archive is a nightly batch job, not a service.  A (date, sensor) pair
//! with no qualifying readings produces no file and no directory; each
//! produced file is announced at `info` level.

use chrono::NaiveDate;
use tracing::{debug, info};

use aq_core::DateRange;
use aq_store::{Reading, Sensor, Store};

use crate::config::ExporterConfig;
use crate::csv::ArchiveFile;
use crate::pivot::pivot_values;
use crate::row::ExportRow;
use crate::schema::{FieldSchema, schema_for};
use crate::{ExportError, ExportResult};

/// Counters reported by [`Exporter::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_written: usize,
    pub rows_written:  usize,
    /// Readings dropped by the completeness gates (no values, or missing the
    /// schema's required field).
    pub readings_skipped: usize,
}

/// Drives one export run over a date range.
pub struct Exporter<'a> {
    store:  &'a Store,
    config: &'a ExporterConfig,
}

impl<'a> Exporter<'a> {
    pub fn new(store: &'a Store, config: &'a ExporterConfig) -> Self {
        Self { store, config }
    }

    /// Export every date in `range` for every supported sensor.
    ///
    /// An error anywhere aborts the whole run; files already written stay on
    /// disk and a re-run over the same range replaces them.
    pub fn run(&self, range: DateRange) -> ExportResult<RunSummary> {
        let mut summary = RunSummary::default();
        let sensors = self.store.sensors()?;

        for date in range {
            for sensor in &sensors {
                if !self.config.supports(&sensor.sensor_type.name) {
                    continue;
                }
                let Some(schema) = schema_for(&sensor.sensor_type.name) else {
                    return Err(ExportError::UnknownSchema(sensor.sensor_type.name.clone()));
                };
                self.export_one(date, sensor, schema, &mut summary)?;
            }
        }
        Ok(summary)
    }

    /// Export one (date, sensor) pair.  No readings means no file.
    fn export_one(
        &self,
        date:    NaiveDate,
        sensor:  &Sensor,
        schema:  &FieldSchema,
        summary: &mut RunSummary,
    ) -> ExportResult<()> {
        let readings =
            self.store
                .readings_for_day(sensor.id, date, self.config.dummy_location_id)?;
        if readings.is_empty() {
            debug!("no readings for sensor {} on {}", sensor.id, date);
            return Ok(());
        }

        let mut file = ArchiveFile::create(&self.config.archive_root, date, sensor, schema)?;
        info!("{}", file.path().display());

        for reading in &readings {
            match self.render_row(sensor, schema, reading)? {
                Some(row) => {
                    file.write_row(&row)?;
                    summary.rows_written += 1;
                }
                None => summary.readings_skipped += 1,
            }
        }

        file.finish()?;
        summary.files_written += 1;
        Ok(())
    }

    /// Pivot and gate one reading.  `Ok(None)` drops it without a row.
    fn render_row(
        &self,
        sensor:  &Sensor,
        schema:  &FieldSchema,
        reading: &Reading,
    ) -> ExportResult<Option<ExportRow>> {
        let fields = pivot_values(reading);
        if fields.is_empty() || !fields.contains_key(schema.required) {
            return Ok(None);
        }

        let mut values = Vec::with_capacity(schema.fields.len());
        for &field in schema.fields {
            match fields.get(field) {
                Some(v) => values.push((*v).to_string()),
                None if self.config.strict_fields => {
                    return Err(ExportError::MissingField {
                        sensor:    sensor.id,
                        timestamp: reading.timestamp,
                        field,
                    });
                }
                None => return Ok(None),
            }
        }

        Ok(Some(ExportRow {
            sensor_id:   sensor.id,
            sensor_type: sensor.sensor_type.name.clone(),
            location:    reading.location.id,
            latitude:    reading.location.latitude,
            longitude:   reading.location.longitude,
            timestamp:   reading.timestamp,
            values,
        }))
    }
}
