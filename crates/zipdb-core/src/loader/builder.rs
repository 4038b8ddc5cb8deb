// crates/zipdb-core/src/loader/builder.rs
#![cfg(feature = "builder")]

use super::{get_cache_path, open_stream, source};
use crate::error::Result;
use crate::model::{convert, ZipDb, CACHE_SUFFIX};
use crate::traits::DefaultBackend;
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

#[derive(Debug, Clone, Copy)]
pub enum CompressionMode {
    Gzip,
    None,
}

/// Parse a CSV source and write a binary cache to `out_path`.
///
/// This is the ahead-of-time variant of the smart load below, for shipping
/// a pre-built cache alongside an application.
pub fn build_database(
    source_path: &Path,
    out_path: &Path,
    compression: CompressionMode,
) -> Result<()> {
    log::info!(
        "building {} -> {} ({:?})",
        source_path.display(),
        out_path.display(),
        compression
    );

    let reader = open_stream(source_path)?;
    let rows = source::read_rows(reader)?;
    let db: ZipDb<DefaultBackend> = convert::from_raw(rows);
    write_cache(out_path, &db, compression)
}

impl ZipDb<DefaultBackend> {
    /// **Smart Load:** checks the sibling cache, loads binary or builds
    /// from source.
    pub(super) fn load_via_builder(path: &Path, filter_states: Option<&[&str]>) -> Result<Self> {
        // A cache path given directly loads without any source involved.
        if is_cache_file(path) {
            return Self::load_binary_file(path, filter_states);
        }

        let cache_path = get_cache_path(path, CACHE_SUFFIX);

        // 1. Check cache
        if Self::is_cache_fresh(path, &cache_path) {
            if let Ok(db) = Self::load_binary_file(&cache_path, filter_states) {
                return Ok(db);
            }
        }

        // 2. Build
        let db = Self::build_from_source(path)?;

        // 3. Cache
        #[cfg(feature = "compact")]
        let comp = CompressionMode::Gzip;
        #[cfg(not(feature = "compact"))]
        let comp = CompressionMode::None;

        if let Err(e) = write_cache(&cache_path, &db, comp) {
            log::warn!("failed to write cache {}: {}", cache_path.display(), e);
        }

        // 4. Filter
        match filter_states {
            Some(f) if !f.is_empty() => {
                let records = db
                    .records
                    .into_iter()
                    .filter(|r| f.iter().any(|s| s.eq_ignore_ascii_case(r.state.as_ref())))
                    .collect();
                Ok(ZipDb { records })
            }
            _ => Ok(db),
        }
    }

    /// Parse a CSV source directly, bypassing the cache entirely.
    pub fn load_from_source(path: impl AsRef<Path>) -> Result<Self> {
        Self::build_from_source(path.as_ref())
    }

    /// Parse a CSV source from any reader.
    pub fn from_source_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(convert::from_raw(source::read_rows(reader)?))
    }

    /// Write this database as a binary cache; gzip is chosen when the
    /// path ends in `.gz`.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        write_cache(path, self, compression_for(path)?)
    }

    // --- Internal helpers ---

    fn build_from_source(path: &Path) -> Result<Self> {
        let reader = open_stream(path)?;
        let rows = source::read_rows(reader)?;
        Ok(convert::from_raw(rows))
    }

    fn is_cache_fresh(source_path: &Path, cache_path: &Path) -> bool {
        let cache_mtime = match fs::metadata(cache_path).and_then(|m| m.modified()) {
            Ok(m) => m,
            Err(_) => return false,
        };
        match fs::metadata(source_path).and_then(|m| m.modified()) {
            Ok(source_mtime) => source_mtime <= cache_mtime,
            Err(_) => true,
        }
    }
}

fn is_cache_file(path: &Path) -> bool {
    let name = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.ends_with(".bin") || name.ends_with(".bin.gz")
}

/// Pick the compression mode a path implies, erroring when gzip is asked
/// for without the `compact` feature.
fn compression_for(path: &Path) -> Result<CompressionMode> {
    if path.extension().is_some_and(|ext| ext == "gz") {
        #[cfg(feature = "compact")]
        return Ok(CompressionMode::Gzip);

        #[cfg(not(feature = "compact"))]
        return Err(crate::error::ZipError::InvalidData(
            "gzip requested but the 'compact' feature is disabled".into(),
        ));
    }
    Ok(CompressionMode::None)
}

/// Writes the database to disk with the cache codec, optionally gzipped.
fn write_cache(path: &Path, db: &ZipDb<DefaultBackend>, compression: CompressionMode) -> Result<()> {
    let bytes = db.to_bytes()?;

    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder: Box<dyn Write> = match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                Box::new(GzEncoder::new(writer, Compression::default()))
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(crate::error::ZipError::InvalidData(
                    "gzip requested but the 'compact' feature is disabled".into(),
                ));
            }
        }
        CompressionMode::None => Box::new(writer),
    };

    encoder.write_all(&bytes)?;
    encoder.flush()?;
    Ok(())
}
