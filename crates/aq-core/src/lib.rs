//! `aq-core` — foundational types for the aq archive exporter.
//!
//! This crate is a dependency of every other `aq-*` crate.  It intentionally
//! has no `aq-*` dependencies and minimal external ones (only `chrono` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`ids`]   | `SensorId`, `LocationId`                          |
//! | [`geo`]   | coordinate rendering for the archive format       |
//! | [`dates`] | `DateRange`, `yesterday()`, timestamp format      |
//! | [`error`] | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the id types.         |
//!           | Required by `aq-export` configuration.                  |

pub mod dates;
pub mod error;
pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use dates::{DateRange, yesterday};
pub use error::{CoreError, CoreResult};
pub use geo::coord_field;
pub use ids::{LocationId, SensorId};
