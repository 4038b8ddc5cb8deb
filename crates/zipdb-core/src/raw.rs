// crates/zipdb-core/src/raw.rs
use serde::Deserialize;

/// Raw zip row structure as it comes from the CSV source.
///
/// NOTE: This type mirrors the external dataset column-for-column,
/// including columns the domain model discards (`unacceptable_cities`,
/// `world_region`, `country`). We do *not* expose this type from the
/// public API.
#[derive(Debug, Deserialize)]
pub struct ZipRowRaw {
    pub zip: String,
    #[serde(rename = "type")]
    pub zip_type: String,
    pub decommissioned: String,
    pub primary_city: String,
    #[serde(default)]
    pub acceptable_cities: String,
    #[serde(default)]
    pub unacceptable_cities: String,
    pub state: String,
    #[serde(default)]
    pub county: String,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub area_codes: String,
    #[serde(default)]
    pub world_region: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub latitude: String,
    #[serde(default)]
    pub longitude: String,
    #[serde(default)]
    pub irs_estimated_population: String,
}

pub type ZipRowsRaw = Vec<ZipRowRaw>;
