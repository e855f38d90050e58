//! Presentation strings for scored records.
//!
//! The numeric pipeline never formats text beyond this module; keeping the
//! strings here keeps locale and wording concerns out of the scoring code.

use std::fmt;

use crate::temperature::{DayEvent, DayInputs};

impl fmt::Display for DayEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayEvent::LimitUp => write!(f, "limit-up"),
            DayEvent::LimitDown => write!(f, "limit-down"),
            DayEvent::VolumeSpike { turnover_pct } => {
                write!(f, "volume-spike (turnover {turnover_pct:.2}%)")
            }
            DayEvent::LowVolumeDecline => write!(f, "low-volume-decline"),
            DayEvent::IndexSelloff => write!(f, "index-selloff"),
            DayEvent::IndexRebound => write!(f, "index-rebound"),
            DayEvent::LimitUpStreak { days } => write!(f, "{days}-day-limit-up-streak"),
        }
    }
}

/// Fixed-format one-line summary of the numbers behind a temperature value.
pub fn format_detail(inputs: &DayInputs) -> String {
    format!(
        "change {:+.2}% | turnover {:.2}% | amplitude {:.2}% | index {:+.2}%",
        inputs.change_pct, inputs.turnover_pct, inputs.amplitude_pct, inputs.index_change_pct,
    )
}
