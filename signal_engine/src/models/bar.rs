//! Canonical in-memory representation of one daily bar (OHLCV plus the
//! exchange-derived percentage fields).
//!
//! This struct is the standard input shape for every computation in the
//! crate, regardless of which quote vendor produced the data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily bar for one trading day.
///
/// Vendor-agnostic: any OHLCV provider that also supplies the daily
/// percentage fields can feed this struct. The usual OHLC ordering
/// (`high >= max(open, close)` and `min(open, close) >= low`) is assumed
/// from the provider and not re-checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    /// Calendar date of the trading day.
    pub date: NaiveDate,

    /// Opening price.
    pub open: f64,

    /// Highest price of the day.
    pub high: f64,

    /// Lowest price of the day.
    pub low: f64,

    /// Closing price.
    pub close: f64,

    /// Traded volume (shares or lots, provider-defined).
    pub volume: u64,

    /// Traded amount in quote currency.
    pub amount: f64,

    /// Intraday amplitude as a percentage of the previous close.
    pub amplitude_pct: f64,

    /// Close-to-close change percentage. Negative on down days.
    pub change_pct: f64,

    /// Turnover rate percentage for the day.
    pub turnover_pct: f64,
}
