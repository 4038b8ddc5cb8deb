//! Basic usage example for zipdb-rs
//!
//! This example demonstrates how to:
//! - Load the postal-code database
//! - Look up zip codes exactly and by prefix
//! - Search by city, county and area code

use zipdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== ZipDB-RS Basic Usage Example ===\n");

    // Load the database
    println!("Loading postal-code database...");
    let db = ZipDb::<StandardBackend>::load()?;
    println!("✓ Database loaded successfully\n");

    // Example 1: Database statistics
    println!("--- Example 1: Database statistics ---");
    let stats = db.stats();
    println!("Records: {}", stats.records);
    println!("Decommissioned: {}", stats.decommissioned);
    println!("With coordinates: {}\n", stats.with_location);

    // Example 2: Exact lookup
    println!("--- Example 2: Exact lookup ---");
    match db.find_exact("44102")? {
        Some(record) => {
            println!("Found: {}", record.location());
            println!("Type: {}", record.code_type);
            println!("County: {}", record.county());
            println!("Timezone: {}", record.timezone());
        }
        None => println!("44102 is not in the dataset"),
    }
    println!();

    // Example 3: Prefix search
    println!("--- Example 3: Prefix search ---");
    let matches = db.find_by_prefix("441")?;
    println!("Zip codes starting with 441: {}", matches.len());
    for record in matches.iter().take(5) {
        println!("- {} ({})", record.code(), record.location());
    }
    println!();

    // Example 4: City search
    println!("--- Example 4: City search ---");
    let matches = db.find_by_city("Cleveland", "OH", false);
    println!("Zip codes with primary city Cleveland, OH: {}", matches.len());
    let with_secondary = db.find_by_city("Cleveland", "OH", true);
    println!("Including acceptable city names: {}", with_secondary.len());
    println!();

    // Example 5: County and area-code search
    println!("--- Example 5: County and area-code search ---");
    let in_county = db.find_by_county("Cuyahoga");
    println!("Zip codes in Cuyahoga County: {}", in_county.len());
    let by_area = db.find_by_area_code("216");
    println!("Zip codes served by area code 216: {}", by_area.len());

    println!("\n=== Example completed successfully ===");
    Ok(())
}
