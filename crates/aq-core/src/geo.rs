//! Coordinate rendering for the archive format.
//!
//! Locations carry latitude/longitude as independent optional `f64` decimal
//! degrees; a location may be geocoded on one axis only, or not at all.
//! The archive renders each axis with exactly three decimal places.  An
//! absent axis renders as the empty string, and so does an exact `0.0`;
//! downstream consumers depend on the empty-string convention.

/// Render one coordinate axis as an archive field.
///
/// `Some(52.5)` → `"52.500"`, `None` → `""`, `Some(0.0)` → `""`.
pub fn coord_field(axis: Option<f64>) -> String {
    match axis {
        Some(v) if v != 0.0 => format!("{v:.3}"),
        _ => String::new(),
    }
}
