// crates/yamadb-core/src/lib.rs

//! # yamadb-core
//!
//! In-memory database of Japanese mountains with a grid-based spatial index
//! for proximity queries, plus the pure domain logic around it: geocoded
//! place entities, result filters, and weather-service deep links.
//!
//! The dataset is static reference data, loaded once and never mutated;
//! every query is a pure function over the immutable index.
//!
//! ```no_run
//! use yamadb_core::prelude::*;
//!
//! fn main() -> yamadb_core::Result<()> {
//!     let db = PeakDb::<StandardBackend>::load()?;
//!     let peaks = ProximityService::new(db);
//!
//!     let query = Coordinates::new(35.3606, 138.7274)?;
//!     if let Some(peak) = peaks.nearest_within(&query, 5.0) {
//!         println!("near {} (mid {})", peak.name(), peak.mid());
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod coords;
pub mod error;
pub mod filter;
pub mod links;
pub mod loader;
pub mod model;
pub mod place;
pub mod proximity;
pub mod spatial;
pub mod text;
pub mod traits;

mod common;

// Re-exports
pub use crate::common::{DbStats, IndexStats};
pub use crate::coords::{haversine_km, Coordinates, EARTH_RADIUS_KM};
pub use crate::error::{GeoError, Result};
pub use crate::links::{WeatherLink, WeatherService};
pub use crate::model::{build_peakdb, DefaultPeakDb, Peak, PeakDb, PeakRaw};
pub use crate::place::{Place, PlaceId, PlaceRecord};
pub use crate::proximity::ProximityService;
pub use crate::spatial::{GridKey, SpatialIndex, DEFAULT_CELL_SIZE_DEG};
pub use crate::traits::{DefaultBackend, GeoBackend, NameMatch, StandardBackend};

/// Everything a typical consumer needs.
pub mod prelude {
    pub use crate::coords::Coordinates;
    pub use crate::error::{GeoError, Result};
    pub use crate::links::{WeatherLink, WeatherService};
    pub use crate::model::{Peak, PeakDb};
    pub use crate::place::{Place, PlaceId};
    pub use crate::proximity::ProximityService;
    pub use crate::spatial::SpatialIndex;
    pub use crate::traits::{DefaultBackend, GeoBackend, NameMatch, StandardBackend};
}
