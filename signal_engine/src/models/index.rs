//! One broad-market index quote.

use serde::{Deserialize, Serialize};

/// A single index quote used by the market-environment assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexQuote {
    /// Short stable key for the index (e.g., "shanghai", "sz50", "csi1000").
    pub key: String,
    /// Display name.
    pub name: String,
    /// Daily change percentage.
    pub change_pct: f64,
}
