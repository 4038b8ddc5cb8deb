// crates/zipdb-core/src/loader/source.rs
#![cfg(feature = "builder")]

use crate::error::Result;
use crate::raw::ZipRowsRaw;
use std::io::Read;

/// Parses the CSV source dataset into raw rows.
///
/// The first line must be the header row; columns are mapped by name onto
/// [`ZipRowRaw`](crate::raw::ZipRowRaw), so extra columns in newer dataset
/// revisions are ignored.
pub(super) fn read_rows<R: Read>(reader: R) -> Result<ZipRowsRaw> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut rows = ZipRowsRaw::new();
    for row in csv_reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
