use clap::{Parser, Subcommand};

/// CLI arguments for zipdb-cli
#[derive(Debug, Parser)]
#[command(
    name = "zipdb",
    version,
    about = "CLI for querying and inspecting the zipdb-core postal-code database"
)]
pub struct CliArgs {
    /// Path to the dataset (CSV source or .bin/.bin.gz cache; default: bundled zips.csv)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Optional comma-separated list of 2-letter state codes to filter on (e.g. OH,PA)
    #[arg(short = 'f', long = "filter", global = true)]
    pub filter: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the database contents
    Stats,

    /// Look up a single zip code
    Lookup {
        /// 5-digit zip code (e.g. 44102)
        code: String,
    },

    /// List zip codes sharing a prefix
    Prefix {
        /// 1-5 leading digits (e.g. 441)
        prefix: String,
    },

    /// Search zip codes by city name
    City {
        /// City name or fragment (case-insensitive)
        city: String,

        /// 2-letter state code to restrict the search to
        #[arg(short, long, default_value = "")]
        state: String,

        /// Also match acceptable (secondary) city names
        #[arg(long)]
        secondary: bool,
    },

    /// Search zip codes by county name
    County {
        /// County name or fragment (case-insensitive)
        county: String,
    },

    /// List zip codes served by an area code
    AreaCode {
        /// Area code or fragment (e.g. 216)
        area_code: String,
    },

    /// Find zip codes within a radius of a point
    Radius {
        /// Latitude of the center, decimal degrees
        latitude: f64,

        /// Longitude of the center, decimal degrees
        longitude: f64,

        /// Radius in miles
        miles: f64,
    },

    /// Build a binary cache from a CSV source
    #[cfg(feature = "builder")]
    Build {
        /// Output path (.bin, or .bin.gz for a compressed cache)
        #[arg(short, long)]
        out: String,
    },
}
