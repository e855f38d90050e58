#![allow(dead_code)]

//! Shared builders for integration tests.

use chrono::NaiveDate;
use signal_engine::models::{bar::DailyBar, bar_series::BarSeries, peer::PeerQuote};

/// A bar on the given 2026 calendar date with explicit percentage fields.
pub fn bar(
    month: u32,
    day: u32,
    change_pct: f64,
    turnover_pct: f64,
    amplitude_pct: f64,
) -> DailyBar {
    let close = 10.0 * (1.0 + change_pct / 100.0);
    DailyBar {
        date: NaiveDate::from_ymd_opt(2026, month, day).unwrap(),
        open: 10.0,
        high: close.max(10.0) * 1.01,
        low: close.min(10.0) * 0.99,
        close,
        volume: 1_000_000,
        amount: close * 1.0e6,
        amplitude_pct,
        change_pct,
        turnover_pct,
    }
}

pub fn stock_series(bars: Vec<DailyBar>) -> BarSeries {
    BarSeries::new("002195", bars)
}

pub fn index_series(bars: Vec<DailyBar>) -> BarSeries {
    BarSeries::new("sh000001", bars)
}

/// `n` peers sorted descending by return, starting at `top` and stepping
/// down by 0.1 per rank. Codes are "000001", "000002", ...
pub fn peer_snapshot(n: usize, top: f64) -> Vec<PeerQuote> {
    (0..n)
        .map(|i| PeerQuote {
            code: format!("{:06}", i + 1),
            name: format!("peer {}", i + 1),
            change_pct: top - i as f64 * 0.1,
        })
        .collect()
}
