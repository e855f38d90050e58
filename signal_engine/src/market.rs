//! Broad-market environment assessment from index quotes.
//!
//! What this module provides:
//! - [`assess`]: average change, advancing count, a five-level strength
//!   classification, and a large-cap/small-cap style read over a set of
//!   [`IndexQuote`]s.
//!
//! The strength thresholds follow the classic seven-index screen (advancing
//! counts of 6 and 4 out of 7), expressed as ratios of the quote-set size.

use serde::Serialize;

use crate::errors::Error;
use crate::models::index::IndexQuote;

/// Quote key of the large-cap style gauge.
pub const LARGE_CAP_KEY: &str = "sz50";
/// Quote key of the small-cap style gauge.
pub const SMALL_CAP_KEY: &str = "csi1000";

/// Style-gauge spread (percentage points) needed to call a dominant style.
const STYLE_SPREAD: f64 = 0.5;

/// Five-level strength read of the overall market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketStatus {
    Strong,
    LeanStrong,
    Rangebound,
    LeanWeak,
    Weak,
}

/// Which cap segment is leading the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketStyle {
    LargeCapValue,
    SmallCapGrowth,
    Balanced,
}

/// Assessment over one day's index quotes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketAssessment {
    /// Mean index change, rounded to two decimals.
    pub avg_change_pct: f64,
    /// Number of advancing indices.
    pub advancing: usize,
    /// Strength classification.
    pub status: MarketStatus,
    /// Style classification; [`MarketStyle::Balanced`] when either style
    /// gauge is missing from the quote set.
    pub style: MarketStyle,
}

/// Assesses the market environment from `quotes`.
///
/// Errors with [`Error::InsufficientData`] when no quotes are given.
pub fn assess(quotes: &[IndexQuote]) -> Result<MarketAssessment, Error> {
    if quotes.is_empty() {
        return Err(Error::InsufficientData("no index quotes".to_string()));
    }

    let total = quotes.len() as f64;
    let avg = quotes.iter().map(|q| q.change_pct).sum::<f64>() / total;
    let advancing = quotes.iter().filter(|q| q.change_pct > 0.0).count();
    let advancing_share = advancing as f64 / total;

    let status = if avg > 1.5 && advancing_share >= 6.0 / 7.0 {
        MarketStatus::Strong
    } else if avg > 0.5 && advancing_share >= 4.0 / 7.0 {
        MarketStatus::LeanStrong
    } else if avg > -0.5 {
        MarketStatus::Rangebound
    } else if avg > -1.5 {
        MarketStatus::LeanWeak
    } else {
        MarketStatus::Weak
    };

    let style = classify_style(
        change_for(quotes, LARGE_CAP_KEY),
        change_for(quotes, SMALL_CAP_KEY),
    );

    Ok(MarketAssessment {
        avg_change_pct: (avg * 100.0).round() / 100.0,
        advancing,
        status,
        style,
    })
}

fn change_for(quotes: &[IndexQuote], key: &str) -> Option<f64> {
    quotes.iter().find(|q| q.key == key).map(|q| q.change_pct)
}

fn classify_style(large_cap: Option<f64>, small_cap: Option<f64>) -> MarketStyle {
    match (large_cap, small_cap) {
        (Some(large), Some(small)) if large > small + STYLE_SPREAD => MarketStyle::LargeCapValue,
        (Some(large), Some(small)) if small > large + STYLE_SPREAD => MarketStyle::SmallCapGrowth,
        _ => MarketStyle::Balanced,
    }
}
