//! yamadb-cli — Command-line interface for yamadb-core
//!
//! This binary provides a simple way to query the bundled mountain dataset
//! from your terminal: dataset statistics, name search, nearest-peak lookup
//! for a coordinate, distance reporting, and weather-service deep links.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ yamadb-cli stats
//!
//! - Search peaks by name (kanji or romanized)
//!   $ yamadb-cli peaks fuji
//!
//! - Nearest peak to a coordinate, within 5 km
//!   $ yamadb-cli nearest 35.3606 138.7274 --max-km 5
//!
//! - Distance to the nearest known peak
//!   $ yamadb-cli distance 35.396 138.733
//!
//! - Weather deep links for a coordinate (includes the mountain-weather
//!   link when a peak is within the proximity threshold)
//!   $ yamadb-cli links 35.396 138.733
//!
//! The nearest-peak search only inspects the 3×3 grid-cell neighborhood of
//! the query, so a coordinate far from every known peak reports no result
//! even under a large `--max-km`.

mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use yamadb_core::links;
use yamadb_core::{config, Coordinates, PeakDb, ProximityService, StandardBackend};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Load dataset (bundled by default, --input for a custom file)
    let db = match &args.input {
        Some(path) => PeakDb::<StandardBackend>::load_from_path(path)?,
        None => PeakDb::<StandardBackend>::load()?,
    };
    let db_stats = db.stats();

    let service = match args.grid_size {
        Some(cell) => ProximityService::with_cell_size(db.peaks, cell),
        None => ProximityService::new(db),
    };

    match args.command {
        Commands::Stats => {
            let index = service.index().stats();
            println!("Dataset statistics:");
            println!("  Peaks: {}", db_stats.peaks);
            println!("  With coordinates: {}", db_stats.located);
            println!("Index statistics:");
            println!("  Indexed peaks: {}", index.peaks);
            println!("  Populated cells: {}", index.cells);
            println!("  Mean peaks per cell: {:.2}", index.mean_peaks_per_cell);
            println!("  Cell size: {}°", service.index().cell_size_deg());
        }

        Commands::Peaks { query } => {
            let mut listed = 0usize;
            for peak in service.index().peaks() {
                if let Some(q) = &query {
                    if !peak.matches(q) {
                        continue;
                    }
                }
                listed += 1;
                match peak.subname() {
                    Some(sub) => println!("{} — {} ({})", peak.mid(), peak.name(), sub),
                    None => println!("{} — {}", peak.mid(), peak.name()),
                }
            }
            if listed == 0 {
                match query {
                    Some(q) => println!("No peaks found matching: {q}"),
                    None => println!("No peaks in the index"),
                }
            }
        }

        Commands::Nearest { lat, lon, max_km } => {
            let query = Coordinates::new(lat, lon)?;
            let hit = match max_km {
                Some(max) => service.nearest_within(&query, max),
                None => service.nearest(&query),
            };
            match hit {
                Some(peak) => {
                    println!("Peak: {}", peak.name());
                    if let Some(sub) = peak.subname() {
                        println!("Also known as: {sub}");
                    }
                    println!("Mountain ID: {}", peak.mid());
                    let (plat, plon) = peak.location().expect("indexed peaks are located");
                    println!("Location: {plat},{plon}");
                    println!(
                        "Distance: {:.2} km",
                        yamadb_core::haversine_km(lat, lon, plat, plon)
                    );
                }
                None => eprintln!("No peak found near {lat},{lon}"),
            }
        }

        Commands::Distance { lat, lon } => {
            let query = Coordinates::new(lat, lon)?;
            match service.distance_to_nearest(&query) {
                Some(km) => println!("{km:.2} km"),
                None => eprintln!("No peak in the grid neighborhood of {lat},{lon}"),
            }
        }

        Commands::Links { lat, lon } => {
            let query = Coordinates::new(lat, lon)?;
            let mid = service
                .nearest_within(&query, config::PROXIMITY_THRESHOLD_KM)
                .map(|p| p.mid().to_string());
            for link in links::links_at(lat, lon, mid.as_deref()) {
                println!("{} — {}", link.name, link.url);
            }
        }
    }

    Ok(())
}
