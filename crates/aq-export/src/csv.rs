//! Archive file paths and the CSV writer.
//!
//! One file per (date, sensor) pair:
//!
//! ```text
//! <root>/<YYYY-MM-DD>/<YYYY-MM-DD>_<sensortype-lowercase>_sensor_<id>.csv
//! ```
//!
//! Files are semicolon-delimited with a header line first.  An existing file
//! at the same path is truncated — a re-run fully replaces the day's output.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::{Writer, WriterBuilder};

use aq_core::dates::TIMESTAMP_FORMAT;
use aq_core::{SensorId, coord_field};

use aq_store::Sensor;

use crate::ExportResult;
use crate::row::ExportRow;
use crate::schema::FieldSchema;

/// Delimiter of the archive format.
const DELIMITER: u8 = b';';

/// Path of the archive file for one (date, sensor) pair.
pub fn archive_path(
    root:      &Path,
    date:      NaiveDate,
    type_name: &str,
    sensor:    SensorId,
) -> PathBuf {
    root.join(date.to_string()).join(format!(
        "{date}_{}_sensor_{sensor}.csv",
        type_name.to_lowercase()
    ))
}

/// An open archive file with its header written.
pub struct ArchiveFile {
    writer: Writer<File>,
    path:   PathBuf,
}

impl ArchiveFile {
    /// Create (or truncate) the file for `(date, sensor)` under `root`,
    /// creating the dated directory if needed, and write the header record.
    pub fn create(
        root:   &Path,
        date:   NaiveDate,
        sensor: &Sensor,
        schema: &FieldSchema,
    ) -> ExportResult<Self> {
        let path = archive_path(root, date, &sensor.sensor_type.name, sensor.id);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let mut writer = WriterBuilder::new().delimiter(DELIMITER).from_path(&path)?;
        writer.write_record(schema.header())?;

        Ok(Self { writer, path })
    }

    /// Where the file is being written.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one data row.
    pub fn write_row(&mut self, row: &ExportRow) -> ExportResult<()> {
        let mut record = vec![
            row.sensor_id.to_string(),
            row.sensor_type.clone(),
            row.location.to_string(),
            coord_field(row.latitude),
            coord_field(row.longitude),
            row.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        ];
        record.extend(row.values.iter().cloned());
        self.writer.write_record(&record)?;
        Ok(())
    }

    /// Flush and close the file.
    pub fn finish(mut self) -> ExportResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}
