//! zipdb-cli — Command-line interface for zipdb-core
//!
//! This binary provides a simple way to query the postal-code database
//! from your terminal. It supports printing basic statistics, looking up
//! a single zip code, listing codes by prefix, searching by city, county
//! or area code, and finding all codes within a radius of a point.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ zipdb-cli stats
//!
//! - Look up one zip code
//!   $ zipdb-cli lookup 44102
//!
//! - List zip codes by prefix
//!   $ zipdb-cli prefix 441
//!
//! - Search by city within a state (add --secondary for acceptable names)
//!   $ zipdb-cli city Cleveland --state OH
//!
//! - Find everything within 10 miles of downtown Cleveland
//!   $ zipdb-cli radius 41.4993 -81.6944 10
//!
//! Data source
//! -----------
//!
//! By default, the CLI loads the CSV dataset bundled with the
//! `zipdb-core` crate and automatically caches a binary version next to
//! it for fast subsequent runs. Use `--input <path>` to point to a custom
//! `.csv`/`.csv.gz` source or a pre-built `.bin`/`.bin.gz` cache, and
//! `--filter <ST,ST,...>` to restrict loading to specific states for
//! speed.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use zipdb_core::{haversine_miles, SearchPoint, StandardBackend, ZipDb, ZipRecord};

fn main() -> anyhow::Result<()> {
    colog::init();
    let args = CliArgs::parse();

    // Determine input file (default CSV inside zipdb-core)
    let input_path = args.input.clone().unwrap_or_else(|| {
        let dir = ZipDb::<StandardBackend>::default_data_dir();
        let filename = ZipDb::<StandardBackend>::default_dataset_filename();
        dir.join(filename).to_string_lossy().to_string()
    });

    // The build command writes a cache and exits; no table is loaded.
    #[cfg(feature = "builder")]
    if let Commands::Build { out } = &args.command {
        let out_path = std::path::Path::new(out);
        let mode = if out.ends_with(".gz") {
            zipdb_core::loader::CompressionMode::Gzip
        } else {
            zipdb_core::loader::CompressionMode::None
        };
        zipdb_core::loader::build_database(std::path::Path::new(&input_path), out_path, mode)?;
        println!("Wrote {out}");
        return Ok(());
    }

    // Parse filter if provided
    let state_filter: Option<Vec<&str>> = args.filter.as_ref().map(|s| {
        s.split(',')
            .map(|x| x.trim())
            .filter(|x| !x.is_empty())
            .collect()
    });

    // Load DB (with filter if any)
    let filter_slice = state_filter.as_deref();
    let db = ZipDb::<StandardBackend>::load_from_path(&input_path, filter_slice)?;

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Database statistics:");
            println!("  Records: {}", stats.records);
            println!("  Decommissioned: {}", stats.decommissioned);
            println!("  With coordinates: {}", stats.with_location);
        }

        Commands::Lookup { code } => match db.find_exact(&code)? {
            Some(record) => print_record(record),
            None => eprintln!("No record found for: {code}"),
        },

        Commands::Prefix { prefix } => {
            let matches = db.find_by_prefix(&prefix)?;
            if matches.is_empty() {
                println!("No zip codes found with prefix: {prefix}");
            } else {
                for record in matches {
                    println!("{} — {}", record.code(), record.location());
                }
            }
        }

        Commands::City {
            city,
            state,
            secondary,
        } => {
            let matches = db.find_by_city(&city, &state, secondary);
            if matches.is_empty() {
                println!("No zip codes found matching: {city}");
            } else {
                for record in matches {
                    println!("{} — {}", record.code(), record.location());
                }
            }
        }

        Commands::County { county } => {
            let matches = db.find_by_county(&county);
            if matches.is_empty() {
                println!("No zip codes found in county: {county}");
            } else {
                for record in matches {
                    println!("{} — {} ({})", record.code(), record.location(), record.county());
                }
            }
        }

        Commands::AreaCode { area_code } => {
            let matches = db.find_by_area_code(&area_code);
            if matches.is_empty() {
                println!("No zip codes found for area code: {area_code}");
            } else {
                for record in matches {
                    println!(
                        "{} — {} [{}]",
                        record.code(),
                        record.location(),
                        record.area_codes.join(",")
                    );
                }
            }
        }

        Commands::Radius {
            latitude,
            longitude,
            miles,
        } => {
            let center = SearchPoint::new(latitude, longitude)?;
            let matches = db.find_within_radius(center, miles)?;
            if matches.is_empty() {
                println!("No zip codes within {miles} miles of ({latitude}, {longitude})");
            } else {
                for record in matches {
                    // Coordinates are always present on radius results.
                    let distance = record
                        .coordinates()
                        .map(|(lat, lng)| {
                            haversine_miles(center, SearchPoint::new(lat, lng).unwrap_or(center))
                        })
                        .unwrap_or_default();
                    println!(
                        "{} — {} ({distance:.1} mi)",
                        record.code(),
                        record.location()
                    );
                }
            }
        }

        #[cfg(feature = "builder")]
        Commands::Build { .. } => unreachable!("handled before loading"),
    }

    Ok(())
}

fn print_record(record: &ZipRecord<StandardBackend>) {
    println!("Zip: {}", record.code());
    println!("Type: {}", record.code_type);
    println!("City: {}", record.primary_city());
    println!("State: {}", record.state());
    println!("County: {}", record.county());
    println!("Timezone: {}", record.timezone());
    match record.coordinates() {
        Some((lat, lng)) => println!("Location: {lat}, {lng}"),
        None => println!("Location: unknown"),
    }
    println!("Decommissioned: {}", record.decommissioned);
    println!("Population: {}", record.estimated_population);
    if !record.secondary_cities.is_empty() {
        println!("Acceptable cities: {}", record.secondary_cities.join(", "));
    }
    if !record.area_codes.is_empty() {
        println!("Area codes: {}", record.area_codes.join(", "));
    }
}
