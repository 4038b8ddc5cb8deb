#![allow(dead_code)]

use zipdb_core::{DefaultBackend, ZipCodeType, ZipDb, ZipRecord};

/// A minimal record with sensible defaults for everything a test does not
/// care about.
pub fn record(
    code: &str,
    city: &str,
    state: &str,
    coords: Option<(f64, f64)>,
) -> ZipRecord<DefaultBackend> {
    ZipRecord {
        code: code.to_owned(),
        code_type: ZipCodeType::Standard,
        primary_city: city.to_owned(),
        state: state.to_owned(),
        timezone: "America/New_York".to_owned(),
        latitude: coords.map(|c| c.0),
        longitude: coords.map(|c| c.1),
        secondary_cities: Vec::new(),
        county: String::new(),
        decommissioned: false,
        estimated_population: 0,
        area_codes: Vec::new(),
    }
}

/// A small fixed table: three Cleveland-area codes, Columbus, New York,
/// and one record without coordinates. Insertion order is part of the
/// fixture; several tests assert on it.
pub fn fixture_db() -> ZipDb<DefaultBackend> {
    ZipDb {
        records: vec![
            record("44114", "Cleveland", "OH", Some((41.5051, -81.6934))),
            record("44102", "Cleveland", "OH", Some((41.4757, -81.7317))),
            record("44017", "Berea", "OH", Some((41.3662, -81.8543))),
            record("43215", "Columbus", "OH", Some((39.9612, -83.0007))),
            record("10001", "New York", "NY", Some((40.7506, -73.9971))),
            record("99950", "Ketchikan", "AK", None),
        ],
    }
}
