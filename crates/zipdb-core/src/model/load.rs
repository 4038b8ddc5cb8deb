// crates/zipdb-core/src/model/load.rs
use crate::model::record::ZipDb;
use crate::traits::ZipBackend;
use bincode::Options;

/// Upper bound on a decoded cache, to prevent malformed-data bombs.
pub(crate) const CACHE_SIZE_LIMIT: u64 = 256 * 1024 * 1024;

impl<B: ZipBackend> ZipDb<B> {
    /// Reconstructs the database from its serialized binary format,
    /// optionally filtering records by 2-letter state code.
    ///
    /// The filter path is a straight retain over the flat record vector;
    /// insertion order of the surviving records is preserved.
    pub fn from_bytes(data: &[u8], filter_states: Option<&[&str]>) -> Result<Self, bincode::Error> {
        let master: ZipDb<B> = bincode::DefaultOptions::new()
            .with_limit(CACHE_SIZE_LIMIT)
            .allow_trailing_bytes()
            .deserialize(data)?;

        // If no filter is provided, return the master DB directly.
        let filter = match filter_states {
            Some(f) if !f.is_empty() => f,
            _ => return Ok(master),
        };

        let records = master
            .records
            .into_iter()
            .filter(|r| filter.iter().any(|s| s.eq_ignore_ascii_case(r.state.as_ref())))
            .collect();

        Ok(ZipDb { records })
    }

    /// Serializes the database with the same codec settings used by
    /// [`from_bytes`](Self::from_bytes).
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::DefaultOptions::new()
            .with_limit(CACHE_SIZE_LIMIT)
            .serialize(self)
    }
}
