use clap::{Parser, Subcommand};

/// CLI arguments for yamadb-cli
#[derive(Debug, Parser)]
#[command(
    name = "yamadb",
    version,
    about = "CLI for querying the yamadb-core mountain proximity database"
)]
pub struct CliArgs {
    /// Path to the input dataset (default: the bundled mountains.json)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Grid cell size in degrees used by the spatial index
    #[arg(short = 'g', long = "grid-size", global = true)]
    pub grid_size: Option<f64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset and index contents
    Stats,

    /// List peaks, optionally filtered by a name substring
    Peaks {
        /// Substring to search (case-insensitive, matches romanized names too)
        query: Option<String>,
    },

    /// Find the nearest peak to a coordinate
    Nearest {
        /// Latitude in degrees
        lat: f64,
        /// Longitude in degrees
        lon: f64,
        /// Maximum accepted distance in kilometers (default: unbounded)
        #[arg(long = "max-km")]
        max_km: Option<f64>,
    },

    /// Distance from a coordinate to the nearest known peak
    Distance {
        /// Latitude in degrees
        lat: f64,
        /// Longitude in degrees
        lon: f64,
    },

    /// Print weather-service deep links for a coordinate
    Links {
        /// Latitude in degrees
        lat: f64,
        /// Longitude in degrees
        lon: f64,
    },
}
