mod common;

use common::{fixture_db, record};
use zipdb_core::{haversine_miles, SearchPoint, ZipDb, ZipError};

// Downtown Cleveland, OH. The fixture clusters around it.
fn cleveland() -> SearchPoint {
    SearchPoint::new(41.4993, -81.6944).unwrap()
}

#[test]
fn radius_ten_miles_finds_the_cleveland_cluster() {
    let db = fixture_db();
    let hits = db.find_within_radius(cleveland(), 10.0).unwrap();
    let codes: Vec<&str> = hits.iter().map(|r| r.code()).collect();

    assert!(codes.contains(&"44114"));
    assert!(codes.contains(&"44102"));
    // Columbus and New York are well over a hundred miles out.
    assert!(!codes.contains(&"43215"));
    assert!(!codes.contains(&"10001"));
}

#[test]
fn every_result_is_within_the_requested_distance() {
    let db = fixture_db();
    for miles in [2.0, 10.0, 30.0, 200.0] {
        for record in db.find_within_radius(cleveland(), miles).unwrap() {
            let (lat, lng) = record.coordinates().expect("results carry coordinates");
            let distance = haversine_miles(cleveland(), SearchPoint::new(lat, lng).unwrap());
            assert!(
                distance <= miles + 1e-6,
                "{} is {distance} mi away, radius was {miles}",
                record.code()
            );
        }
    }
}

#[test]
fn larger_radii_are_supersets_of_smaller_ones() {
    let db = fixture_db();
    let mut previous: Vec<String> = Vec::new();
    for miles in [1.0, 5.0, 20.0, 150.0, 500.0] {
        let codes: Vec<String> = db
            .find_within_radius(cleveland(), miles)
            .unwrap()
            .iter()
            .map(|r| r.code().to_owned())
            .collect();
        for code in &previous {
            assert!(codes.contains(code), "{code} dropped when radius grew to {miles}");
        }
        previous = codes;
    }
}

#[test]
fn zero_radius_matches_nothing_even_at_an_exact_coordinate() {
    let mut db = fixture_db();
    db.records.push(record(
        "44199",
        "Cleveland",
        "OH",
        Some((41.4993, -81.6944)),
    ));

    // The candidate rectangle collapses to an empty open interval, so even
    // the record stored at exactly the query point is excluded.
    assert!(db.find_within_radius(cleveland(), 0.0).unwrap().is_empty());

    // Any positive radius admits it again (distance zero is inclusive).
    let hits = db.find_within_radius(cleveland(), 0.1).unwrap();
    let codes: Vec<&str> = hits.iter().map(|r| r.code()).collect();
    assert_eq!(codes, vec!["44199"]);
}

#[test]
fn records_without_coordinates_are_never_returned() {
    let db = fixture_db();
    let hits = db.find_within_radius(cleveland(), 5000.0).unwrap();
    assert!(hits.iter().all(|r| r.code() != "99950"));
    // Everything else in the fixture is on the continent.
    assert_eq!(hits.len(), 5);
}

#[test]
fn results_keep_store_order_not_distance_order() {
    let db = fixture_db();
    let hits = db.find_within_radius(cleveland(), 150.0).unwrap();
    let codes: Vec<&str> = hits.iter().map(|r| r.code()).collect();
    // 43215 is the farthest hit but still precedes 10001, exactly as
    // inserted; no nearest-first reordering happens.
    assert_eq!(codes, vec!["44114", "44102", "44017", "43215"]);
}

#[test]
fn invalid_distances_are_rejected() {
    let db = fixture_db();
    for bad in [-1.0, -0.0001, f64::NAN, f64::INFINITY] {
        let err = db.find_within_radius(cleveland(), bad).unwrap_err();
        assert!(matches!(err, ZipError::InvalidDistance(_)), "{bad}");
    }
}

#[test]
fn invalid_points_are_rejected_at_construction() {
    assert!(matches!(
        SearchPoint::new(f64::NAN, -81.0).unwrap_err(),
        ZipError::InvalidPoint(_)
    ));
    assert!(matches!(
        SearchPoint::new(41.0, f64::NEG_INFINITY).unwrap_err(),
        ZipError::InvalidPoint(_)
    ));
}

#[test]
fn radius_search_on_an_empty_store_is_empty() {
    let db: ZipDb<zipdb_core::DefaultBackend> = ZipDb {
        records: Vec::new(),
    };
    assert!(db.find_within_radius(cleveland(), 50.0).unwrap().is_empty());
}
