// crates/zipdb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression) and delegates payload
//! parsing to the CSV source reader and the binary cache codec.

use crate::error::{Result, ZipError};
use crate::model::ZipDb;
use crate::traits::DefaultBackend;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "builder")]
mod builder;
#[cfg(feature = "builder")]
mod source;

#[cfg(feature = "builder")]
pub use builder::{build_database, CompressionMode};

// Single in-process cache so we only build/deserialize once per process.
// Queries always go through the explicit `ZipDb` value returned to the
// caller; there is no ambient query state.
static ZIP_DB_CACHE: OnceCell<ZipDb<DefaultBackend>> = OnceCell::new();

/// Upstream home of the source dataset.
pub const DATA_SOURCE_URL: &str = "https://github.com/midwire/free_zipcode_data";

impl ZipDb<DefaultBackend> {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "zips.csv"
    }

    /// Load the database from the bundled dataset, memoized per process.
    pub fn load() -> Result<Self> {
        ZIP_DB_CACHE
            .get_or_try_init(|| {
                let dir = Self::default_data_dir();
                let file = Self::default_dataset_filename();
                Self::load_from_path(dir.join(file), None)
            })
            .cloned()
    }

    /// Load from an explicit path, optionally keeping only the given
    /// 2-letter state codes.
    ///
    /// With the `builder` feature (default) the path may be a CSV source
    /// (`.csv` / `.csv.gz`), in which case a sibling binary cache is used
    /// when fresh and rebuilt otherwise. Without `builder`, only binary
    /// caches can be opened.
    pub fn load_from_path(path: impl AsRef<Path>, filter_states: Option<&[&str]>) -> Result<Self> {
        let path = path.as_ref();

        #[cfg(feature = "builder")]
        {
            Self::load_via_builder(path, filter_states)
        }

        #[cfg(not(feature = "builder"))]
        {
            Self::load_binary_file(path, filter_states)
        }
    }

    /// Load a bincode cache file (plain or gzipped by extension).
    pub(crate) fn load_binary_file(path: &Path, filter_states: Option<&[&str]>) -> Result<Self> {
        let mut reader = open_stream(path)?;
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data, filter_states).map_err(ZipError::Bincode)
    }
}

// -----------------------------------------------------------------------
// INTERNAL TRANSPORT HELPERS
// -----------------------------------------------------------------------

/// Opens a file, buffers it, and wraps it in a gzip decoder when the path
/// carries a `.gz` extension. Returns a generic reader so the caller does
/// not care about the compression.
pub(crate) fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        ZipError::NotFound(format!("dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if path.extension().is_some_and(|ext| ext == "gz") {
        #[cfg(feature = "compact")]
        return Ok(Box::new(flate2::read::GzDecoder::new(reader)));

        #[cfg(not(feature = "compact"))]
        return Err(ZipError::InvalidData(
            "gzipped dataset requested but the 'compact' feature is disabled".into(),
        ));
    }

    Ok(Box::new(reader))
}

#[cfg(feature = "builder")]
pub(crate) fn get_cache_path(source_path: &Path, suffix: &str) -> PathBuf {
    let filename = source_path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    source_path.with_file_name(format!("{filename}{suffix}"))
}
