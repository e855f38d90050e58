//! Daily market-temperature scoring.
//!
//! What this module provides:
//! - [`score_history`]: score every bar of an instrument series against a
//!   reference index series, producing one [`TemperatureRecord`] per day.
//!
//! The temperature is a weighted composite of five clamped sub-scores (price
//! move, turnover activity, index co-movement, 3-day momentum, amplitude
//! direction). Sub-scores live on [0, 100]; the published composite is
//! compressed to the narrower [5, 95] band. The two ranges differ on purpose
//! and must not be unified.
//!
//! Scoring is fully deterministic. The index series is joined by calendar
//! date; a stock date with no index match contributes 0.0 co-movement rather
//! than failing.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::Error;
use crate::models::bar_series::BarSeries;
use crate::render;

/// Weight of the price-move sub-score.
const W_PRICE: f64 = 0.30;
/// Weight of the turnover-activity sub-score.
const W_TURNOVER: f64 = 0.20;
/// Weight of the index co-movement sub-score.
const W_INDEX: f64 = 0.20;
/// Weight of the 3-day momentum sub-score.
const W_MOMENTUM: f64 = 0.15;
/// Weight of the amplitude-direction sub-score.
const W_AMPLITUDE: f64 = 0.15;

/// Daily change percentage treated as a limit move on the main board.
pub const LIMIT_MOVE_PCT: f64 = 9.9;

/// Published temperature floor.
const VALUE_FLOOR: i32 = 5;
/// Published temperature ceiling.
const VALUE_CEILING: i32 = 95;

/// Raw per-day numbers a composite temperature was computed from.
///
/// Kept on the record for traceability; the human-readable `detail` string is
/// rendered from these once and never re-parsed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayInputs {
    /// Close-to-close change percentage of the instrument.
    pub change_pct: f64,
    /// Turnover rate percentage of the instrument.
    pub turnover_pct: f64,
    /// Intraday amplitude percentage of the instrument.
    pub amplitude_pct: f64,
    /// Change percentage of the reference index on the matching date, or 0.0
    /// when the index has no bar for that date.
    pub index_change_pct: f64,
}

/// A notable event attached to one scored day.
///
/// At most one event survives per day; the variants are checked in a fixed
/// priority order and a limit-up run of two or more days replaces the plain
/// [`DayEvent::LimitUp`]. Serialized (and displayed) as the short strings the
/// report layer expects, e.g. `limit-up` or `3-day-limit-up-streak`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DayEvent {
    /// Change at or above [`LIMIT_MOVE_PCT`].
    LimitUp,
    /// Change at or below the negated [`LIMIT_MOVE_PCT`].
    LimitDown,
    /// Turnover above three times the series average.
    VolumeSpike {
        /// The day's turnover rate, carried into the message.
        turnover_pct: f64,
    },
    /// Thin turnover (under 0.4x the series average) on a down day.
    LowVolumeDecline,
    /// Reference index fell more than 1.5%.
    IndexSelloff,
    /// Reference index rose more than 1.2% while the instrument rose more
    /// than 3%.
    IndexRebound,
    /// Unbroken run of limit-up days ending today.
    LimitUpStreak {
        /// Length of the run, including today. Always >= 2.
        days: u32,
    },
}

impl Serialize for DayEvent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// One scored day of an instrument's temperature history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureRecord {
    /// Display date in "MM-DD" form, derived from the bar date.
    pub date: String,
    /// Composite temperature, clamped to [5, 95].
    pub value: i32,
    /// Notable event for the day, if any rule matched.
    pub event: Option<DayEvent>,
    /// The numbers `value` was computed from.
    pub inputs: DayInputs,
    /// Human-readable summary of `inputs`. Traceability only.
    pub detail: String,
}

/// Scores every bar of `stock` against `index`, one record per bar, in input
/// order.
///
/// Errors with [`Error::InsufficientData`] when either series is empty; there
/// is no partial output. A non-positive turnover average degrades to a
/// neutral turnover ratio of 1.0 instead of failing.
pub fn score_history(
    stock: &BarSeries,
    index: &BarSeries,
) -> Result<Vec<TemperatureRecord>, Error> {
    if stock.is_empty() {
        return Err(Error::InsufficientData(format!(
            "no bars for {}",
            stock.symbol
        )));
    }
    if index.is_empty() {
        return Err(Error::InsufficientData(format!(
            "no bars for index {}",
            index.symbol
        )));
    }

    let index_by_date: HashMap<NaiveDate, f64> = index
        .bars
        .iter()
        .map(|bar| (bar.date, bar.change_pct))
        .collect();

    let turnover_avg =
        stock.bars.iter().map(|b| b.turnover_pct).sum::<f64>() / stock.bars.len() as f64;

    let mut records = Vec::with_capacity(stock.bars.len());
    for (i, bar) in stock.bars.iter().enumerate() {
        let index_change_pct = index_by_date.get(&bar.date).copied().unwrap_or(0.0);

        let f1 = clamp_score(50.0 + bar.change_pct * 5.0);

        let turnover_ratio = if turnover_avg > 0.0 {
            bar.turnover_pct / turnover_avg
        } else {
            1.0
        };
        let f2 = clamp_score(30.0 + turnover_ratio * 25.0);

        let f3 = clamp_score(50.0 + index_change_pct * 15.0);

        // Trailing 3-day momentum; the window shrinks near the series start.
        let window = &stock.bars[i.saturating_sub(2)..=i];
        let momentum3 =
            window.iter().map(|b| b.change_pct).sum::<f64>() / window.len() as f64;
        let f4 = clamp_score(50.0 + momentum3 * 5.0);

        let f5 = if bar.change_pct >= 0.0 {
            clamp_score(50.0 + bar.amplitude_pct * 3.0)
        } else {
            clamp_score(50.0 - bar.amplitude_pct * 3.0)
        };

        let composite = W_PRICE * f1
            + W_TURNOVER * f2
            + W_INDEX * f3
            + W_MOMENTUM * f4
            + W_AMPLITUDE * f5;
        let value = (composite.round() as i32).clamp(VALUE_FLOOR, VALUE_CEILING);

        let inputs = DayInputs {
            change_pct: bar.change_pct,
            turnover_pct: bar.turnover_pct,
            amplitude_pct: bar.amplitude_pct,
            index_change_pct,
        };

        records.push(TemperatureRecord {
            date: bar.date.format("%m-%d").to_string(),
            value,
            event: classify_event(stock, i, index_change_pct, turnover_avg),
            detail: render::format_detail(&inputs),
            inputs,
        });
    }

    Ok(records)
}

fn clamp_score(raw: f64) -> f64 {
    raw.clamp(0.0, 100.0)
}

/// First matching rule wins; the streak override replaces a plain limit-up
/// once the unbroken run reaches two days.
fn classify_event(
    stock: &BarSeries,
    i: usize,
    index_change_pct: f64,
    turnover_avg: f64,
) -> Option<DayEvent> {
    let bar = &stock.bars[i];

    if bar.change_pct >= LIMIT_MOVE_PCT {
        let days = limit_up_run(stock, i);
        if days >= 2 {
            return Some(DayEvent::LimitUpStreak { days });
        }
        return Some(DayEvent::LimitUp);
    }
    if bar.change_pct <= -LIMIT_MOVE_PCT {
        return Some(DayEvent::LimitDown);
    }
    if bar.turnover_pct > 3.0 * turnover_avg {
        return Some(DayEvent::VolumeSpike {
            turnover_pct: bar.turnover_pct,
        });
    }
    if bar.turnover_pct < 0.4 * turnover_avg && bar.change_pct < -1.0 {
        return Some(DayEvent::LowVolumeDecline);
    }
    if index_change_pct < -1.5 {
        return Some(DayEvent::IndexSelloff);
    }
    if index_change_pct > 1.2 && bar.change_pct > 3.0 {
        return Some(DayEvent::IndexRebound);
    }
    None
}

/// Length of the unbroken limit-up run ending at bar `i`, inclusive.
fn limit_up_run(stock: &BarSeries, i: usize) -> u32 {
    stock.bars[..=i]
        .iter()
        .rev()
        .take_while(|b| b.change_pct >= LIMIT_MOVE_PCT)
        .count() as u32
}
