//! `aq-export` — dump archived sensor readings to per-day CSV files.
//!
//! Walks the inclusive `[--start_date, --end_date]` range (both default to
//! yesterday) and writes one semicolon-delimited file per (date, sensor)
//! pair with qualifying readings.  Re-runs overwrite.

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use aq_core::{DateRange, dates};
use aq_export::{Exporter, ExporterConfig};
use aq_store::Store;

/// Export sensor readings to per-day, per-sensor CSV archive files.
#[derive(Parser, Debug)]
#[command(name = "aq-export")]
#[command(version)]
#[command(about = "Dump archived sensor readings to per-day CSV files")]
struct Args {
    /// First date to export (YYYY-MM-DD).  Defaults to yesterday.
    #[arg(long = "start_date", value_parser = dates::parse_date)]
    start_date: Option<NaiveDate>,

    /// Last date to export, inclusive (YYYY-MM-DD).  Defaults to yesterday.
    #[arg(long = "end_date", value_parser = dates::parse_date)]
    end_date: Option<NaiveDate>,

    /// SQLite database holding sensors, locations, and readings.
    #[arg(long, default_value = "sensors.db")]
    db: PathBuf,

    /// TOML configuration file.  Defaults apply when absent.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured archive root directory.
    #[arg(long)]
    archive_root: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &args.config {
        Some(path) => ExporterConfig::load(path)?,
        None => ExporterConfig::default(),
    };
    if let Some(root) = args.archive_root {
        config.archive_root = root;
    }

    let yesterday = dates::yesterday();
    let start = args.start_date.unwrap_or(yesterday);
    let end = args.end_date.unwrap_or(yesterday);

    // Historical behavior: an inverted range is reported and the process
    // exits cleanly without writing anything.
    let Ok(range) = DateRange::new(start, end) else {
        println!("end_date is before start_date");
        return Ok(());
    };

    let store = Store::open(&args.db)?;
    let summary = Exporter::new(&store, &config).run(range)?;

    println!(
        "{} files, {} rows written ({} incomplete readings skipped)",
        summary.files_written, summary.rows_written, summary.readings_skipped
    );

    Ok(())
}
