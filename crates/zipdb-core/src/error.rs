// crates/zipdb-core/src/error.rs

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ZipError>;

/// Errors surfaced by the store and its loader.
///
/// A *missing record* is never an error: exact lookups return `Ok(None)`
/// and the list-returning queries return an empty vector. The variants
/// here cover malformed caller input and dataset/cache faults.
#[derive(Debug, Error)]
pub enum ZipError {
    /// The given zip code is not a string of 1 to 5 ASCII digits.
    #[error("invalid zip code {0:?}: expected 1 to 5 ASCII digits")]
    InvalidCode(String),

    /// A search point component is not a finite number.
    #[error("invalid search point: {0}")]
    InvalidPoint(String),

    /// A search distance is negative or not finite.
    #[error("invalid search distance {0}: expected a finite, non-negative number of miles")]
    InvalidDistance(f64),

    /// The dataset or cache file could not be located.
    #[error("dataset not found: {0}")]
    NotFound(String),

    /// The dataset or cache exists but cannot be used as requested.
    #[error("invalid dataset: {0}")]
    InvalidData(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "builder")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("cache codec error: {0}")]
    Bincode(#[from] bincode::Error),
}
