use thiserror::Error;

/// The unified error type for the `signal_engine` crate.
///
/// Malformed but well-typed numeric inputs (zero turnover averages, index
/// dates with no match) never error; they degrade to the documented fallback
/// values inside each computation. Only structurally unusable inputs land
/// here.
#[derive(Debug, Error)]
pub enum Error {
    /// The input series is empty or shorter than the computation requires.
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// The target symbol is missing from the peer snapshot.
    #[error("symbol not found in peer snapshot: {0}")]
    SymbolNotFound(String),
}
