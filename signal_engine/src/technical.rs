//! Technical-indicator summary for one bar series.
//!
//! What this module provides:
//! - [`summarize`]: moving averages, MA alignment, volume-price relation,
//!   support/resistance levels, trend, streak, and multi-period returns,
//!   computed once per request from a series snapshot.
//!
//! At least [`MIN_BARS`] bars are required; everything longer-dated (MA60,
//! the 20-day deltas) degrades to `None` or to the shorter look-back instead
//! of failing.

use serde::Serialize;

use crate::errors::Error;
use crate::models::{bar::DailyBar, bar_series::BarSeries};

/// Minimum series length [`summarize`] accepts.
pub const MIN_BARS: usize = 5;

/// Look-back window for support/resistance levels.
const LEVEL_LOOKBACK: usize = 20;
/// Minimum relative distance from the current price for a candidate level.
const LEVEL_GAP: f64 = 0.005;
/// Volume ratio above which a day counts as high-volume.
const VOLUME_HIGH: f64 = 1.3;
/// Volume ratio below which a day counts as low-volume.
const VOLUME_LOW: f64 = 0.7;

/// Relative ordering of the defined moving averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaAlignment {
    /// Short averages on top: MA5 >= MA10 >= MA20 >= MA60 wherever defined.
    Bullish,
    /// Short averages on the bottom.
    Bearish,
    /// Neither ordering holds.
    Tangled,
    /// Fewer than three averages are defined.
    Insufficient,
}

/// Latest-day volume behavior relative to the recent average, split by the
/// direction of the price move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumePriceRelation {
    /// Up day on more than 1.3x recent volume.
    UpWithVolume,
    /// Up day on less than 0.7x recent volume.
    UpLowVolume,
    /// Down day on more than 1.3x recent volume.
    DownWithVolume,
    /// Down day on less than 0.7x recent volume.
    DownLowVolume,
    /// Flat day or mid-band volume.
    Neutral,
}

/// Direction classification from the 5-bar and 20-bar close deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Uptrend,
    Downtrend,
    /// Short-term up against a longer-term decline.
    Rebound,
    /// Short-term down inside a longer-term rise.
    Pullback,
    Consolidation,
}

/// Direction of the trailing streak of same-sign days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakDirection {
    Up,
    Down,
}

/// Indicator summary for one series, stateless beyond this return value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicalSummary {
    /// Latest close.
    pub current_price: f64,
    /// Mean of the last 5 closes.
    pub ma5: Option<f64>,
    /// Mean of the last 10 closes, when at least 10 bars exist.
    pub ma10: Option<f64>,
    /// Mean of the last 20 closes, when at least 20 bars exist.
    pub ma20: Option<f64>,
    /// Mean of the last 60 closes, when at least 60 bars exist.
    pub ma60: Option<f64>,
    /// Ordering of the defined averages.
    pub ma_alignment: MaAlignment,
    /// Latest-day volume-price classification.
    pub volume_price: VolumePriceRelation,
    /// Up to three distinct lows below the current price, closest first.
    pub support_levels: Vec<f64>,
    /// Up to three distinct highs above the current price, closest first.
    pub resistance_levels: Vec<f64>,
    /// Trend classification from the 5- and 20-bar deltas.
    pub trend: Trend,
    /// Length of the trailing same-direction streak, in days.
    pub consecutive_days: u32,
    /// Direction of that streak, fixed by the latest bar.
    pub consecutive_direction: StreakDirection,
    /// Percentage return over the last 5 bars, when history allows.
    pub change_5d: Option<f64>,
    /// Percentage return over the last 10 bars.
    pub change_10d: Option<f64>,
    /// Percentage return over the last 20 bars.
    pub change_20d: Option<f64>,
}

/// Computes the indicator summary for `series`.
///
/// Errors with [`Error::InsufficientData`] when fewer than [`MIN_BARS`] bars
/// are present.
pub fn summarize(series: &BarSeries) -> Result<TechnicalSummary, Error> {
    let bars = &series.bars;
    if bars.len() < MIN_BARS {
        return Err(Error::InsufficientData(format!(
            "{} has {} bars, need at least {MIN_BARS}",
            series.symbol,
            bars.len()
        )));
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let latest = &bars[bars.len() - 1];
    let current_price = latest.close;

    let ma5 = tail_mean(&closes, 5);
    let ma10 = tail_mean(&closes, 10);
    let ma20 = tail_mean(&closes, 20);
    let ma60 = tail_mean(&closes, 60);

    let recent_volumes = &bars[bars.len() - MIN_BARS..];
    let volume_mean = recent_volumes.iter().map(|b| b.volume as f64).sum::<f64>()
        / recent_volumes.len() as f64;
    let volume_ratio = if volume_mean > 0.0 {
        latest.volume as f64 / volume_mean
    } else {
        1.0
    };

    let level_window = &bars[bars.len() - bars.len().min(LEVEL_LOOKBACK)..];
    let (support_levels, resistance_levels) = key_levels(level_window, current_price);

    let (consecutive_days, consecutive_direction) = trailing_streak(bars);

    Ok(TechnicalSummary {
        current_price,
        ma_alignment: classify_alignment(&[ma5, ma10, ma20, ma60]),
        ma5,
        ma10,
        ma20,
        ma60,
        volume_price: classify_volume_price(latest.change_pct, volume_ratio),
        support_levels,
        resistance_levels,
        trend: classify_trend(&closes),
        consecutive_days,
        consecutive_direction,
        change_5d: period_return(&closes, 5),
        change_10d: period_return(&closes, 10),
        change_20d: period_return(&closes, 20),
    })
}

/// Mean of the last `k` values, or `None` when fewer than `k` exist.
fn tail_mean(closes: &[f64], k: usize) -> Option<f64> {
    if closes.len() < k {
        return None;
    }
    Some(closes[closes.len() - k..].iter().sum::<f64>() / k as f64)
}

fn classify_alignment(mas: &[Option<f64>; 4]) -> MaAlignment {
    // Longer averages need longer history, so the defined set is always a
    // prefix of (MA5, MA10, MA20, MA60).
    let defined: Vec<f64> = mas.iter().flatten().copied().collect();
    if defined.len() < 3 {
        return MaAlignment::Insufficient;
    }
    if defined.windows(2).all(|w| w[0] >= w[1]) {
        return MaAlignment::Bullish;
    }
    if defined.windows(2).all(|w| w[0] <= w[1]) {
        return MaAlignment::Bearish;
    }
    MaAlignment::Tangled
}

fn classify_volume_price(change_pct: f64, ratio: f64) -> VolumePriceRelation {
    if change_pct > 0.0 && ratio > VOLUME_HIGH {
        VolumePriceRelation::UpWithVolume
    } else if change_pct > 0.0 && ratio < VOLUME_LOW {
        VolumePriceRelation::UpLowVolume
    } else if change_pct < 0.0 && ratio > VOLUME_HIGH {
        VolumePriceRelation::DownWithVolume
    } else if change_pct < 0.0 && ratio < VOLUME_LOW {
        VolumePriceRelation::DownLowVolume
    } else {
        VolumePriceRelation::Neutral
    }
}

/// Distinct lows/highs at least [`LEVEL_GAP`] away from the current price;
/// the three closest on each side, supports descending and resistances
/// ascending.
fn key_levels(window: &[DailyBar], current_price: f64) -> (Vec<f64>, Vec<f64>) {
    let mut resistance: Vec<f64> = window
        .iter()
        .map(|b| b.high)
        .filter(|&h| h > current_price * (1.0 + LEVEL_GAP))
        .collect();
    resistance.sort_by(|a, b| a.total_cmp(b));
    resistance.dedup();
    resistance.truncate(3);

    let mut support: Vec<f64> = window
        .iter()
        .map(|b| b.low)
        .filter(|&l| l < current_price * (1.0 - LEVEL_GAP))
        .collect();
    support.sort_by(|a, b| b.total_cmp(a));
    support.dedup();
    support.truncate(3);

    (support, resistance)
}

fn classify_trend(closes: &[f64]) -> Trend {
    let last = closes.len() - 1;
    let delta5 = closes[last] - closes[last.saturating_sub(5)];
    let delta20 = if closes.len() > LEVEL_LOOKBACK {
        closes[last] - closes[last - LEVEL_LOOKBACK]
    } else {
        delta5
    };

    if delta5 > 0.0 && delta20 > 0.0 {
        Trend::Uptrend
    } else if delta5 < 0.0 && delta20 < 0.0 {
        Trend::Downtrend
    } else if delta5 > 0.0 {
        Trend::Rebound
    } else if delta5 < 0.0 {
        Trend::Pullback
    } else {
        Trend::Consolidation
    }
}

/// Counts backward from the latest bar; a change of exactly zero counts as
/// "up".
fn trailing_streak(bars: &[DailyBar]) -> (u32, StreakDirection) {
    let up = bars[bars.len() - 1].change_pct >= 0.0;
    let days = bars
        .iter()
        .rev()
        .take_while(|b| (b.change_pct >= 0.0) == up)
        .count() as u32;
    let direction = if up {
        StreakDirection::Up
    } else {
        StreakDirection::Down
    };
    (days, direction)
}

fn period_return(closes: &[f64], n: usize) -> Option<f64> {
    let last = closes.len() - 1;
    if last < n {
        return None;
    }
    let base = closes[last - n];
    if base == 0.0 {
        return None;
    }
    Some((closes[last] / base - 1.0) * 100.0)
}
