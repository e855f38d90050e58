//! Post-processing of a computed temperature history.
//!
//! What this module provides:
//! - [`validate_history`]: drop records whose display dates resolve to a
//!   Saturday or Sunday, keep (and flag) records whose dates cannot be
//!   resolved at all, and flag values outside [0, 100] without touching them.
//!
//! Record dates are the short "MM-DD" display form, so resolving a weekday
//! needs an assumed year supplied by the caller. Repair means dropping a
//! record, never editing one; a second pass over already-valid output is a
//! no-op.

use chrono::{Datelike, NaiveDate, Weekday};
use thiserror::Error;
use tracing::warn;

use crate::temperature::TemperatureRecord;

/// A soft finding surfaced alongside a validated history.
///
/// Warnings never remove or alter records; they exist so the caller can
/// report them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationWarning {
    /// The record's display date did not resolve to a calendar date; the
    /// record was kept because its validity cannot be determined.
    #[error("unparseable display date \"{date}\"; record kept")]
    UnparseableDate {
        /// The offending display date.
        date: String,
    },

    /// A value outside [0, 100] points at an upstream scoring bug; it is
    /// surfaced, never silently fixed.
    #[error("temperature {value} on {date} outside [0, 100]")]
    ValueOutOfRange {
        /// Display date of the offending record.
        date: String,
        /// The out-of-range value.
        value: i32,
    },
}

/// A temperature history with weekend entries removed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedHistory {
    /// Surviving records, in their original order.
    pub records: Vec<TemperatureRecord>,
    /// How many records were dropped for falling on a weekend.
    pub removed_weekend: usize,
    /// Soft findings, also emitted through `tracing`.
    pub warnings: Vec<ValidationWarning>,
}

/// Validates `history` against the trading calendar implied by
/// `assumed_year`.
pub fn validate_history(history: Vec<TemperatureRecord>, assumed_year: i32) -> ValidatedHistory {
    let mut records = Vec::with_capacity(history.len());
    let mut removed_weekend = 0;
    let mut warnings = Vec::new();

    for record in history {
        if record.value < 0 || record.value > 100 {
            let warning = ValidationWarning::ValueOutOfRange {
                date: record.date.clone(),
                value: record.value,
            };
            warn!("{warning}");
            warnings.push(warning);
        }

        match resolve_display_date(&record.date, assumed_year) {
            Some(date) if is_weekend(date) => removed_weekend += 1,
            Some(_) => records.push(record),
            None => {
                let warning = ValidationWarning::UnparseableDate {
                    date: record.date.clone(),
                };
                warn!("{warning}");
                warnings.push(warning);
                records.push(record);
            }
        }
    }

    ValidatedHistory {
        records,
        removed_weekend,
        warnings,
    }
}

/// Resolves an "MM-DD" display date against the assumed year.
fn resolve_display_date(display: &str, assumed_year: i32) -> Option<NaiveDate> {
    let (month, day) = display.split_once('-')?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(assumed_year, month, day)
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
