//! Job manifest: parsing, normalization, and loading.
//!
//! A manifest is a TOML document describing one or more report jobs:
//! - which symbol to analyze and against which reference index,
//! - where the pre-fetched JSON inputs live,
//! - the assumed year for resolving short display dates,
//! - where the report JSON goes.
//!
//! Normalization trims the symbol and sector strings and rejects manifests
//! with no jobs or blank symbols. Job order in the document is preserved.
//!
//! Entrypoints:
//! - Parse + normalize from a TOML string: [`load_manifest_str`]
//! - Parse + normalize from a file path: [`load_manifest_path`]

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Top-level manifest mapping job names to their configuration.
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Map of job name -> configuration, in document order.
    pub jobs: IndexMap<String, JobCfg>,
}

/// One report job.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct JobCfg {
    /// Instrument code to analyze (e.g., "002195").
    pub symbol: String,

    /// Sector display name carried into the positioning report. Optional;
    /// only meaningful together with `peer_snapshot`.
    pub sector: Option<String>,

    /// Year used to resolve "MM-DD" display dates to weekdays.
    pub assumed_year: i32,

    /// JSON file holding the instrument's `BarSeries`.
    pub stock_bars: PathBuf,

    /// JSON file holding the reference index's `BarSeries`.
    pub index_bars: PathBuf,

    /// Optional JSON file holding the ranked peer snapshot.
    pub peer_snapshot: Option<PathBuf>,

    /// Optional JSON file holding the day's index quotes.
    pub index_quotes: Option<PathBuf>,

    /// Where the report JSON is written.
    pub output: PathBuf,
}

/// Parses and normalizes a manifest from a TOML string.
pub fn load_manifest_str(raw: &str) -> anyhow::Result<Manifest> {
    let mut manifest: Manifest = toml::from_str(raw).context("parse job manifest")?;
    normalize_manifest(&mut manifest)?;
    Ok(manifest)
}

/// Reads, parses, and normalizes a manifest from a file path.
pub fn load_manifest_path(path: impl AsRef<Path>) -> anyhow::Result<Manifest> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read job manifest {}", path.display()))?;
    load_manifest_str(&raw)
}

/// Trims string fields and rejects structurally unusable manifests.
pub fn normalize_manifest(manifest: &mut Manifest) -> anyhow::Result<()> {
    if manifest.jobs.is_empty() {
        bail!("job manifest has no jobs");
    }
    for (name, job) in manifest.jobs.iter_mut() {
        job.symbol = job.symbol.trim().to_string();
        if job.symbol.is_empty() {
            bail!("job \"{name}\" has an empty symbol");
        }
        if let Some(sector) = job.sector.take() {
            let sector = sector.trim().to_string();
            if !sector.is_empty() {
                job.sector = Some(sector);
            }
        }
    }
    Ok(())
}
