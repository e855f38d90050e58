//! One row of an externally-ranked sector snapshot.

use serde::{Deserialize, Serialize};

/// A peer instrument's daily return inside a sector snapshot.
///
/// Snapshots arrive already sorted descending by `change_pct`; the ranking
/// authority is the upstream data source, not this crate. An exact-zero
/// `change_pct` is the upstream's "no data" placeholder, not a genuine flat
/// day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerQuote {
    /// Instrument code (e.g., "002195").
    pub code: String,
    /// Display name.
    pub name: String,
    /// Daily change percentage.
    pub change_pct: f64,
}
