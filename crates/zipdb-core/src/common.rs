use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the database.
///
/// Returned by [`stats`](crate::ZipDb::stats), these counts reflect the
/// materialized in-memory database after any state filtering that might
/// have been applied at load time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DbStats {
    pub records: usize,
    pub decommissioned: usize,
    pub with_location: usize,
}
