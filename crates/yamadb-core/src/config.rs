// crates/yamadb-core/src/config.rs

//! Application-level constants shared by the library consumers.

/// Country suffix used by the place filters.
pub const TARGET_COUNTRY: &str = "Japan";

/// Maximum distance (km) at which a place is considered "near" a peak and
/// the mountain-weather deep link is offered.
pub const PROXIMITY_THRESHOLD_KM: f64 = 5.0;
