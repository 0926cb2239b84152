//! Per-kind record counts reported by `/stats`.

use serde::Serialize;

/// Number of stored records of each kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub amenities: u64,
    pub cities: u64,
    pub places: u64,
    pub reviews: u64,
    pub states: u64,
    pub users: u64,
}
