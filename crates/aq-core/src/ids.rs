//! Strongly typed, zero-cost identifier wrappers.
//!
//! Ids are database primary keys; they are `Copy + Ord + Hash` so they can be
//! used as map keys and sorted collection elements without ceremony.  The
//! inner integer is `pub` because it appears verbatim in archive file names
//! and rows.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to the type's MAX.
            pub const INVALID: $name = $name(<$inner>::MAX);
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for i64 {
            #[inline(always)]
            fn from(id: $name) -> i64 {
                i64::from(id.0)
            }
        }
    };
}

typed_id! {
    /// Primary key of a sensor row in the store.
    pub struct SensorId(u32);
}

typed_id! {
    /// Primary key of a location row in the store.
    pub struct LocationId(u32);
}
