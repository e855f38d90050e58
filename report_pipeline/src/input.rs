//! JSON decoding of the pre-fetched input files.

use std::fs;
use std::path::{Path, PathBuf};

use signal_engine::models::{bar_series::BarSeries, index::IndexQuote, peer::PeerQuote};
use snafu::{Backtrace, ResultExt, Snafu};

/// Errors at the file boundary of the pipeline.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum InputError {
    /// An input file could not be read.
    #[snafu(display("Failed to read {}: {source}", path.display()))]
    Read {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    /// An input file held JSON that does not match the expected shape.
    #[snafu(display("Failed to decode {}: {source}", path.display()))]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
        backtrace: Backtrace,
    },

    /// A report could not be serialized.
    #[snafu(display("Failed to encode report: {source}"))]
    Encode {
        source: serde_json::Error,
        backtrace: Backtrace,
    },

    /// A report file could not be written.
    #[snafu(display("Failed to write {}: {source}", path.display()))]
    Write {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },
}

/// Loads a bar series from a JSON file.
pub fn load_bar_series(path: &Path) -> Result<BarSeries, InputError> {
    let bytes = fs::read(path).context(ReadSnafu { path })?;
    serde_json::from_slice(&bytes).context(DecodeSnafu { path })
}

/// Loads a ranked peer snapshot from a JSON file.
pub fn load_peer_snapshot(path: &Path) -> Result<Vec<PeerQuote>, InputError> {
    let bytes = fs::read(path).context(ReadSnafu { path })?;
    serde_json::from_slice(&bytes).context(DecodeSnafu { path })
}

/// Loads a day's index quotes from a JSON file.
pub fn load_index_quotes(path: &Path) -> Result<Vec<IndexQuote>, InputError> {
    let bytes = fs::read(path).context(ReadSnafu { path })?;
    serde_json::from_slice(&bytes).context(DecodeSnafu { path })
}
