// crates/yamadb-core/src/error.rs

use thiserror::Error;

/// All errors produced by this crate.
///
/// Lookup misses are *not* errors: every search operation returns an
/// `Option` and reserves `GeoError` for construction and I/O failures.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Latitude outside `[-90, 90]` or longitude outside `[-180, 180]`.
    #[error("invalid coordinate ({lat}, {lon}): lat must be in [-90, 90], lon in [-180, 180]")]
    InvalidCoordinate { lat: f64, lon: f64 },

    /// A place id must contain at least one non-whitespace character.
    #[error("place id must not be empty")]
    EmptyPlaceId,

    /// Dataset file missing or unreadable.
    #[error("{0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary decode error: {0}")]
    Bincode(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, GeoError>;
