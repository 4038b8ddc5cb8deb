//! Radius search example for zipdb-rs
//!
//! Finds every zip code within a given distance of a point and shows the
//! exact great-circle distance for each hit.

use zipdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== ZipDB-RS Radius Search Example ===\n");

    let db = ZipDb::<StandardBackend>::load()?;

    // Downtown Cleveland, OH
    let center = SearchPoint::new(41.4993, -81.6944)?;

    for miles in [5.0, 10.0, 25.0] {
        let matches = db.find_within_radius(center, miles)?;
        println!("Within {miles} miles: {} zip codes", matches.len());
        for record in &matches {
            if let Some((lat, lng)) = record.coordinates() {
                let distance = haversine_miles(center, SearchPoint::new(lat, lng)?);
                println!("- {} {} ({distance:.1} mi)", record.code(), record.location());
            }
        }
        println!();
    }

    // A zero radius never matches: the candidate rectangle collapses to an
    // empty open interval.
    let none = db.find_within_radius(center, 0.0)?;
    println!("Within 0 miles: {} zip codes", none.len());

    Ok(())
}
