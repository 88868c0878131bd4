//! `aq-store` — SQLite read interface for the aq archive exporter.
//!
//! The exporter treats the database as a pre-existing, read-only fact: all
//! entities were written by the ingestion side of the system.  This crate
//! exposes exactly the two queries an export run needs, plus schema/insert
//! helpers used by fixtures and seeding tools.
//!
//! # Crate layout
//!
//! | Module    | Contents                                             |
//! |-----------|------------------------------------------------------|
//! | [`model`] | `Sensor`, `SensorType`, `Location`, `Reading`        |
//! | [`store`] | `Store` — connection, queries, fixture helpers       |
//! | [`error`] | `StoreError`, `StoreResult`                          |

pub mod error;
pub mod model;
pub mod store;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{StoreError, StoreResult};
pub use model::{Location, Reading, ReadingValue, Sensor, SensorType};
pub use store::Store;
