#![cfg(feature = "builder")]

use std::io::Cursor;
use std::path::PathBuf;
use zipdb_core::{DefaultZipDb, ZipCodeType, ZipDb};

const HEADER: &str = "zip,type,decommissioned,primary_city,acceptable_cities,unacceptable_cities,state,county,timezone,area_codes,world_region,country,latitude,longitude,irs_estimated_population";

fn parse(rows: &str) -> DefaultZipDb {
    let csv = format!("{HEADER}\n{rows}");
    ZipDb::from_source_reader(Cursor::new(csv)).unwrap()
}

fn bundled_dataset() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("zips.csv")
}

#[test]
fn columns_map_onto_the_record() {
    let db = parse(
        "44102,STANDARD,0,Cleveland,\"Lakewood, Ohio City\",West Side,OH,Cuyahoga County,America/New_York,\"216,440\",0,US,41.48,-81.74,31930",
    );
    assert_eq!(db.records.len(), 1);

    let r = &db.records[0];
    assert_eq!(r.code(), "44102");
    assert_eq!(r.code_type, ZipCodeType::Standard);
    assert_eq!(r.primary_city(), "Cleveland");
    assert_eq!(r.state(), "OH");
    assert_eq!(r.county(), "Cuyahoga County");
    assert_eq!(r.timezone(), "America/New_York");
    assert_eq!(r.coordinates(), Some((41.48, -81.74)));
    assert_eq!(r.secondary_cities, vec!["Lakewood", "Ohio City"]);
    assert_eq!(r.area_codes, vec!["216", "440"]);
    assert!(!r.decommissioned);
    assert_eq!(r.estimated_population, 31930);
    // The discarded columns (unacceptable cities, region, country) leave
    // no trace on the record.
    assert_eq!(r.location(), "Cleveland, OH");
}

#[test]
fn code_type_strings_parse_and_unknowns_become_standard() {
    let db = parse(
        "20505,UNIQUE,0,Washington,,,DC,,,,0,US,38.94,-77.14,0\n\
         44101,PO BOX,0,Cleveland,,,OH,,,,0,US,41.52,-81.62,0\n\
         96860,MILITARY,0,Pearl Harbor,,,HI,,,,0,US,21.35,-157.95,0",
    );
    assert_eq!(db.records[0].code_type, ZipCodeType::Unique);
    assert_eq!(db.records[1].code_type, ZipCodeType::PoBox);
    assert_eq!(db.records[2].code_type, ZipCodeType::Standard);
}

#[test]
fn missing_or_placeholder_coordinates_become_absent() {
    let db = parse(
        "34643,STANDARD,1,Largo,,,FL,Pinellas County,America/New_York,727,0,US,0,0,0\n\
         09007,STANDARD,0,APO,,,AE,,,,0,US,,,0\n\
         44102,STANDARD,0,Cleveland,,,OH,,,216,0,US,41.48,-81.74,0",
    );
    assert_eq!(db.records[0].coordinates(), None);
    assert!(db.records[0].decommissioned);
    assert_eq!(db.records[1].coordinates(), None);
    assert_eq!(db.records[1].timezone(), "");
    assert!(db.records[1].area_codes.is_empty());
    assert_eq!(db.records[2].coordinates(), Some((41.48, -81.74)));
}

#[test]
fn bundled_dataset_round_trips_through_exact_lookup() {
    let db = DefaultZipDb::load_from_source(bundled_dataset()).unwrap();
    assert_eq!(db.records.len(), 17);

    // Every source row is reachable by its code.
    for record in db.records() {
        let found = db.find_exact(record.code()).unwrap();
        assert_eq!(found.map(|r| r.code()), Some(record.code()));
    }

    // Spot-check one row field-for-field against the source.
    let r = db.find_exact("10001").unwrap().expect("10001 is bundled");
    assert_eq!(r.primary_city(), "New York");
    assert_eq!(r.state(), "NY");
    assert_eq!(r.county(), "New York County");
    assert_eq!(r.secondary_cities, vec!["Manhattan", "Greeley Square"]);
    assert_eq!(r.area_codes, vec!["212", "646", "917"]);
    assert_eq!(r.estimated_population, 21102);
    assert_eq!(r.coordinates(), Some((40.75, -73.99)));

    // Accented names survive ingestion and match folded queries.
    let hits = db.find_by_city("anasco", "PR", false);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].code(), "00610");
}

#[test]
fn cache_codec_round_trips() {
    let db = DefaultZipDb::load_from_source(bundled_dataset()).unwrap();

    let bytes = db.to_bytes().unwrap();
    let restored = DefaultZipDb::from_bytes(&bytes, None).unwrap();
    assert_eq!(restored.records.len(), db.records.len());
    assert_eq!(
        restored.find_exact("44102").unwrap().map(|r| r.location()),
        Some("Cleveland, OH".to_owned())
    );
}

#[test]
fn state_filter_applies_on_decode() {
    let db = DefaultZipDb::load_from_source(bundled_dataset()).unwrap();
    let bytes = db.to_bytes().unwrap();

    let ohio = DefaultZipDb::from_bytes(&bytes, Some(&["oh"])).unwrap();
    assert!(!ohio.records.is_empty());
    assert!(ohio.records().iter().all(|r| r.state() == "OH"));

    // An empty filter list means no filtering at all.
    let all = DefaultZipDb::from_bytes(&bytes, Some(&[])).unwrap();
    assert_eq!(all.records.len(), db.records.len());
}
