// crates/yamadb-core/src/proximity.rs

//! Nearest-peak queries on top of [`SpatialIndex`].
//!
//! The service is pure computation over the immutable index: no I/O, no
//! retries, and a miss is an ordinary `None`, never an error.

use crate::config;
use crate::coords::{haversine_km, Coordinates};
use crate::model::{Peak, PeakDb};
use crate::place::Place;
use crate::spatial::SpatialIndex;
use crate::traits::GeoBackend;

/// Proximity queries over the static peak dataset.
///
/// Construct once at startup (the composition root owns it) and share
/// read-only; the underlying index never changes.
#[derive(Debug, Clone)]
pub struct ProximityService<B: GeoBackend> {
    index: SpatialIndex<B>,
}

impl<B: GeoBackend> ProximityService<B> {
    pub fn new(db: PeakDb<B>) -> Self {
        Self::from_peaks(db.peaks)
    }

    pub fn from_peaks(peaks: Vec<Peak<B>>) -> Self {
        Self {
            index: SpatialIndex::build(peaks),
        }
    }

    pub fn with_cell_size(peaks: Vec<Peak<B>>, cell_deg: f64) -> Self {
        Self {
            index: SpatialIndex::build_with_cell_size(peaks, cell_deg),
        }
    }

    pub fn index(&self) -> &SpatialIndex<B> {
        &self.index
    }

    /// Peak at exactly these coordinates (bit-exact, O(1)).
    pub fn find_at(&self, query: &Coordinates) -> Option<&Peak<B>> {
        self.index.find_exact(query.lat(), query.lon())
    }

    /// Nearest peak within `max_km` of `query`, or `None`.
    ///
    /// An exact coordinate hit short-circuits with distance treated as zero.
    /// Otherwise candidates come from the 3×3 cell neighborhood only: a peak
    /// beyond that window is never found, even under a generous threshold.
    /// A candidate exactly at the threshold qualifies; ties keep the
    /// earlier-found candidate.
    pub fn nearest_within(&self, query: &Coordinates, max_km: f64) -> Option<&Peak<B>> {
        if let Some(exact) = self.find_at(query) {
            return Some(exact);
        }

        let mut best = max_km + 1.0;
        let mut nearest = None;

        for peak in self.index.candidates_near(query.lat(), query.lon()) {
            let Some((lat, lon)) = peak.location() else {
                continue;
            };
            let dist = haversine_km(query.lat(), query.lon(), lat, lon);
            if dist <= max_km && dist < best {
                best = dist;
                nearest = Some(peak);
            }
        }

        nearest
    }

    /// Nearest peak with no distance threshold.
    ///
    /// "Unbounded" applies to the threshold only; the search window is still
    /// the ±1-cell neighborhood.
    pub fn nearest(&self, query: &Coordinates) -> Option<&Peak<B>> {
        self.nearest_within(query, f64::INFINITY)
    }

    /// Distance in kilometers from `query` to the nearest known peak.
    ///
    /// `None` when no peak exists in the populated grid neighborhood.
    pub fn distance_to_nearest(&self, query: &Coordinates) -> Option<f64> {
        let peak = self.nearest(query)?;
        let (lat, lon) = peak.location()?;
        Some(haversine_km(query.lat(), query.lon(), lat, lon))
    }

    /// Mountain id for a place, when a peak lies within the default
    /// proximity threshold. Drives whether the mountain-weather deep link
    /// is offered.
    pub fn mid_for_place(&self, place: &Place) -> Option<&str> {
        self.nearest_within(place.coordinates(), config::PROXIMITY_THRESHOLD_KM)
            .map(|p| p.mid())
    }
}
