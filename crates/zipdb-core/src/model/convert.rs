// crates/zipdb-core/src/model/convert.rs
use crate::model::record::{ZipCodeType, ZipDb, ZipRecord};
use crate::raw::ZipRowsRaw;
use crate::traits::ZipBackend;

/// Converts raw CSV rows into a [`ZipDb`] instance using the specified
/// backend.
///
/// Delimited list columns are split here; the domain type only ever sees
/// proper sequences. Coordinate parsing enforces the both-or-neither
/// invariant: if either component is missing or unparseable, the record
/// carries no geodetic point at all. The `(0, 0)` placeholder the source
/// uses for rows without an authoritative geodetic source is normalized
/// to absent as well.
pub fn from_raw<B: ZipBackend>(rows: ZipRowsRaw) -> ZipDb<B> {
    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        let code_type = ZipCodeType::from_source(&row.zip_type).unwrap_or_else(|| {
            log::warn!(
                "unrecognized zip code type {:?} for {}; ingesting as STANDARD",
                row.zip_type,
                row.zip
            );
            ZipCodeType::Standard
        });

        let (latitude, longitude) = parse_coordinates(&row.latitude, &row.longitude);

        records.push(ZipRecord {
            code: B::str_from(row.zip.trim()),
            code_type,
            primary_city: B::str_from(row.primary_city.trim()),
            state: B::str_from(row.state.trim()),
            timezone: B::str_from(row.timezone.trim()),
            latitude: latitude.map(B::float_from),
            longitude: longitude.map(B::float_from),
            secondary_cities: split_list(&row.acceptable_cities),
            county: B::str_from(row.county.trim()),
            decommissioned: parse_flag(&row.decommissioned),
            estimated_population: row.irs_estimated_population.trim().parse().unwrap_or(0),
            area_codes: split_list(&row.area_codes),
        });
    }

    ZipDb { records }
}

/// Parses an optional floating-point column.
///
/// Trims whitespace before parsing; an empty or unparseable column is
/// `None`.
pub(crate) fn parse_opt_f64(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok()
}

fn parse_coordinates(lat: &str, lng: &str) -> (Option<f64>, Option<f64>) {
    match (parse_opt_f64(lat), parse_opt_f64(lng)) {
        // (0, 0) is the source's stand-in for "no geodetic source".
        (Some(a), Some(b)) if !(a == 0.0 && b == 0.0) => (Some(a), Some(b)),
        _ => (None, None),
    }
}

fn parse_flag(s: &str) -> bool {
    let t = s.trim();
    t == "1" || t.eq_ignore_ascii_case("true")
}

fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_owned)
        .collect()
}
