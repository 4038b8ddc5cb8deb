// crates/zipdb-core/src/model/record.rs
use crate::traits::{DefaultBackend, NameMatch, ZipBackend};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The master database struct: a flat table of postal-code records.
///
/// Records keep the order of the source dataset; every query iterates in
/// that order, so result sequences are stable for a given loaded table.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "B: ZipBackend", deserialize = "B: ZipBackend"))]
pub struct ZipDb<B: ZipBackend> {
    /// Master list of all records. Contiguous memory, insertion order.
    pub records: Vec<ZipRecord<B>>,
}

/// Convenient alias for the default backend.
pub type DefaultZipDb = ZipDb<DefaultBackend>;

/// USPS classification of a zip code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZipCodeType {
    Unique,
    PoBox,
    Standard,
}

impl ZipCodeType {
    /// Parse the classification string used by the source dataset.
    pub fn from_source(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "UNIQUE" => Some(Self::Unique),
            "PO BOX" | "PO_BOX" => Some(Self::PoBox),
            "STANDARD" => Some(Self::Standard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unique => "UNIQUE",
            Self::PoBox => "PO BOX",
            Self::Standard => "STANDARD",
        }
    }
}

impl fmt::Display for ZipCodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One postal-code record. Immutable after bulk load.
///
/// `latitude`/`longitude` are either both present (a valid geodetic point)
/// or both absent; rows without an authoritative geodetic source carry
/// `None` and never participate in radius search.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "B: ZipBackend", deserialize = "B: ZipBackend"))]
pub struct ZipRecord<B: ZipBackend> {
    /// The zip code itself, stored verbatim from the source. Natural key.
    pub code: B::Str,
    pub code_type: ZipCodeType,
    pub primary_city: B::Str,
    /// 2-letter state or territory code.
    pub state: B::Str,
    /// IANA zone id (e.g. "America/New_York"), may be empty.
    pub timezone: B::Str,
    pub latitude: Option<B::Float>,
    pub longitude: Option<B::Float>,
    /// Acceptable non-primary city names, empty if none.
    #[serde(default)]
    pub secondary_cities: Vec<String>,
    pub county: B::Str,
    /// Still a record even when no longer in use; never a deletion.
    pub decommissioned: bool,
    pub estimated_population: u32,
    /// Telephone area codes serving the zip, empty if none.
    #[serde(default)]
    pub area_codes: Vec<String>,
}

impl<B: ZipBackend> ZipRecord<B> {
    /// The zip code string.
    pub fn code(&self) -> &str {
        self.code.as_ref()
    }

    /// Primary city associated with the zip.
    pub fn primary_city(&self) -> &str {
        self.primary_city.as_ref()
    }

    /// 2-letter state code.
    pub fn state(&self) -> &str {
        self.state.as_ref()
    }

    /// IANA timezone id, possibly empty.
    pub fn timezone(&self) -> &str {
        self.timezone.as_ref()
    }

    /// County name, possibly empty.
    pub fn county(&self) -> &str {
        self.county.as_ref()
    }

    /// The city with its state, e.g. `"Cleveland, OH"`.
    pub fn location(&self) -> String {
        format!("{}, {}", self.primary_city(), self.state())
    }

    /// The geodetic point of this record, if one exists.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((B::float_to_f64(lat), B::float_to_f64(lng))),
            _ => None,
        }
    }
}

impl<B: ZipBackend> NameMatch for ZipRecord<B> {
    #[inline]
    fn name_str(&self) -> &str {
        self.primary_city()
    }
}
