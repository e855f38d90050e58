//! A collection of daily bars for a specific symbol.

use serde::{Deserialize, Serialize};

use crate::models::bar::DailyBar;

/// Represents a complete set of daily bars for a single symbol.
///
/// Bars are ordered ascending by date with no duplicate dates; the provider
/// is responsible for chronological ordering and trading-day correctness,
/// and the engine never re-sorts. A series is immutable once built and is
/// owned exclusively by the computation that receives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    /// The symbol this data represents (e.g., "002195", "sh000001").
    pub symbol: String,
    /// The collection of daily bars, ascending by date.
    pub bars: Vec<DailyBar>,
}

impl BarSeries {
    /// Builds a series from already-ordered bars.
    pub fn new(symbol: impl Into<String>, bars: Vec<DailyBar>) -> Self {
        Self {
            symbol: symbol.into(),
            bars,
        }
    }

    /// Number of bars in the series.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// True when the series holds no bars.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The most recent bar, if any.
    pub fn latest(&self) -> Option<&DailyBar> {
        self.bars.last()
    }
}
