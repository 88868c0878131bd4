//! Pivot a reading's value pairs into a field map.

use rustc_hash::FxHashMap;

use aq_store::Reading;

/// Pivot `(value_type, value)` pairs into a field-name → value map.
///
/// When a reading carries the same field twice the later pair wins, matching
/// the archive's historical behavior.
pub fn pivot_values(reading: &Reading) -> FxHashMap<&str, &str> {
    reading
        .values
        .iter()
        .map(|v| (v.value_type.as_str(), v.value.as_str()))
        .collect()
}
