//! Assembles one anomaly report from a job's configured inputs.
//!
//! Sections are computed independently: a section that fails with a domain
//! error is logged and recorded as absent while the rest of the report still
//! emits. Only file-boundary failures abort a job.

use std::fs;
use std::path::Path;

use serde::Serialize;
use snafu::ResultExt;
use tracing::warn;

use signal_engine::market::{self, MarketAssessment};
use signal_engine::sector::{self, SectorPositionReport};
use signal_engine::technical::{self, TechnicalSummary};
use signal_engine::temperature::{self, TemperatureRecord};
use signal_engine::validate;

use crate::config::JobCfg;
use crate::input::{self, EncodeSnafu, InputError, WriteSnafu};

/// Validated temperature history section.
#[derive(Debug, Serialize)]
pub struct TemperatureSection {
    /// Surviving records, oldest first.
    pub records: Vec<TemperatureRecord>,
    /// Weekend-dated records dropped by the validator.
    pub removed_weekend: usize,
    /// Validator findings, rendered for the report.
    pub warnings: Vec<String>,
}

/// Structured output for one job.
///
/// An absent section failed with a domain error that has already been
/// logged; the renderer shows whatever is present.
#[derive(Debug, Serialize)]
pub struct AnomalyReport {
    /// The analyzed instrument.
    pub symbol: String,
    /// Year the display dates were validated against.
    pub assumed_year: i32,
    /// Scored and validated temperature history.
    pub temperature: Option<TemperatureSection>,
    /// Indicator summary of the instrument series.
    pub technical: Option<TechnicalSummary>,
    /// Sector positioning, when a peer snapshot was configured.
    pub sector: Option<SectorPositionReport>,
    /// Market-environment assessment, when index quotes were configured.
    pub market: Option<MarketAssessment>,
}

/// Runs every configured computation for `job`.
pub fn build_report(job: &JobCfg) -> Result<AnomalyReport, InputError> {
    let stock = input::load_bar_series(&job.stock_bars)?;
    let index = input::load_bar_series(&job.index_bars)?;

    let temperature = match temperature::score_history(&stock, &index) {
        Ok(history) => {
            let validated = validate::validate_history(history, job.assumed_year);
            if validated.removed_weekend > 0 {
                warn!(
                    symbol = %job.symbol,
                    removed = validated.removed_weekend,
                    "dropped weekend-dated temperature records",
                );
            }
            Some(TemperatureSection {
                warnings: validated.warnings.iter().map(|w| w.to_string()).collect(),
                removed_weekend: validated.removed_weekend,
                records: validated.records,
            })
        }
        Err(err) => {
            warn!(symbol = %job.symbol, %err, "temperature section skipped");
            None
        }
    };

    let technical = match technical::summarize(&stock) {
        Ok(summary) => Some(summary),
        Err(err) => {
            warn!(symbol = %job.symbol, %err, "technical section skipped");
            None
        }
    };

    let sector = match &job.peer_snapshot {
        Some(path) => {
            let peers = input::load_peer_snapshot(path)?;
            let name = job.sector.as_deref().unwrap_or("");
            match sector::rank_position(&job.symbol, name, &peers) {
                Ok(report) => Some(report),
                Err(err) => {
                    warn!(symbol = %job.symbol, %err, "sector section skipped");
                    None
                }
            }
        }
        None => None,
    };

    let market = match &job.index_quotes {
        Some(path) => {
            let quotes = input::load_index_quotes(path)?;
            match market::assess(&quotes) {
                Ok(assessment) => Some(assessment),
                Err(err) => {
                    warn!(symbol = %job.symbol, %err, "market section skipped");
                    None
                }
            }
        }
        None => None,
    };

    Ok(AnomalyReport {
        symbol: job.symbol.clone(),
        assumed_year: job.assumed_year,
        temperature,
        technical,
        sector,
        market,
    })
}

/// Serializes `report` as pretty JSON at `path`.
pub fn write_report(report: &AnomalyReport, path: &Path) -> Result<(), InputError> {
    let bytes = serde_json::to_vec_pretty(report).context(EncodeSnafu)?;
    fs::write(path, bytes).context(WriteSnafu { path })
}
