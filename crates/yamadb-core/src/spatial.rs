// crates/yamadb-core/src/spatial.rs

//! # Spatial Index
//!
//! Grid-based index over the static peak dataset. Built once, immutable
//! afterwards: no writer exists post-construction, so the index can be
//! shared read-only across threads without locking.
//!
//! Two structures are maintained:
//! - an exact table keyed by the raw bit patterns of `(lat, lon)`, giving
//!   O(1) lookup of literal re-queries of a known point;
//! - a uniform grid keyed by quantized `(lat, lon)` cells, giving O(k)
//!   candidate retrieval where k is the population of a 3×3 cell block.

use crate::common::IndexStats;
use crate::model::Peak;
use crate::traits::GeoBackend;
use std::collections::HashMap;

/// Default cell edge in degrees (~11 km of latitude).
pub const DEFAULT_CELL_SIZE_DEG: f64 = 0.1;

/// Exact-coordinate key: the untouched IEEE-754 bit patterns.
///
/// Bit-exact comparison is intentional. The exact table exists to catch
/// literal re-queries of a coordinate already in the dataset, not "close
/// enough" points, so no epsilon is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ExactKey {
    lat_bits: u64,
    lon_bits: u64,
}

impl ExactKey {
    fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat_bits: lat.to_bits(),
            lon_bits: lon.to_bits(),
        }
    }
}

/// Grid cell key: `floor(lat / cell), floor(lon / cell)` as an integer pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridKey {
    pub lat: i32,
    pub lon: i32,
}

impl GridKey {
    /// Quantize a coordinate into its cell.
    pub fn quantize(lat: f64, lon: f64, cell_deg: f64) -> Self {
        Self {
            lat: (lat / cell_deg).floor() as i32,
            lon: (lon / cell_deg).floor() as i32,
        }
    }

    fn offset(self, dlat: i32, dlon: i32) -> Self {
        Self {
            lat: self.lat + dlat,
            lon: self.lon + dlon,
        }
    }
}

/// Grid-based spatial index over a set of peaks.
///
/// Peaks missing either coordinate are dropped at build time; every indexed
/// peak has a location. On duplicate coordinates the exact table keeps the
/// last writer while the grid keeps every entry in insertion order.
#[derive(Debug, Clone)]
pub struct SpatialIndex<B: GeoBackend> {
    cell_deg: f64,
    /// Indexed peaks, in input order. Exact table and grid point into this.
    peaks: Vec<Peak<B>>,
    exact: HashMap<ExactKey, usize>,
    grid: HashMap<GridKey, Vec<usize>>,
}

impl<B: GeoBackend> SpatialIndex<B> {
    /// Build an index with the default cell size.
    pub fn build(peaks: Vec<Peak<B>>) -> Self {
        Self::build_with_cell_size(peaks, DEFAULT_CELL_SIZE_DEG)
    }

    /// Build an index with an explicit cell size in degrees.
    ///
    /// Deterministic given identical input order; O(n).
    pub fn build_with_cell_size(peaks: Vec<Peak<B>>, cell_deg: f64) -> Self {
        let mut index = Self {
            cell_deg,
            peaks: Vec::new(),
            exact: HashMap::new(),
            grid: HashMap::new(),
        };

        for peak in peaks {
            let Some((lat, lon)) = peak.location() else {
                continue;
            };
            let slot = index.peaks.len();
            index.peaks.push(peak);
            // Last writer wins on duplicate coordinates.
            index.exact.insert(ExactKey::new(lat, lon), slot);
            index
                .grid
                .entry(GridKey::quantize(lat, lon, cell_deg))
                .or_default()
                .push(slot);
        }

        index
    }

    pub fn cell_size_deg(&self) -> f64 {
        self.cell_deg
    }

    /// O(1) lookup by bit-exact coordinate equality.
    pub fn find_exact(&self, lat: f64, lon: f64) -> Option<&Peak<B>> {
        self.exact
            .get(&ExactKey::new(lat, lon))
            .map(|&i| &self.peaks[i])
    }

    /// All peaks in the 3×3 block of cells centered on the query's cell.
    ///
    /// Iteration order is fixed: lat offset -1..=1 outer, lon offset -1..=1
    /// inner, each cell's peaks in insertion order. Points farther than the
    /// neighboring cells are never considered, whatever threshold the caller
    /// later applies; this trades recall at the window edge for O(k)
    /// retrieval instead of scanning the whole dataset.
    pub fn candidates_near(&self, lat: f64, lon: f64) -> Vec<&Peak<B>> {
        let center = GridKey::quantize(lat, lon, self.cell_deg);
        let mut nearby = Vec::new();

        for dlat in -1..=1 {
            for dlon in -1..=1 {
                if let Some(cell) = self.grid.get(&center.offset(dlat, dlon)) {
                    nearby.extend(cell.iter().map(|&i| &self.peaks[i]));
                }
            }
        }

        nearby
    }

    /// Every peak reachable through the exact table, in map iteration order.
    ///
    /// When duplicate coordinates existed in the input this yields only the
    /// surviving (last-inserted) peak per coordinate.
    pub fn peaks(&self) -> impl Iterator<Item = &Peak<B>> {
        self.exact.values().map(|&i| &self.peaks[i])
    }

    pub fn stats(&self) -> IndexStats {
        let peaks = self.exact.len();
        let cells = self.grid.len();
        IndexStats {
            peaks,
            cells,
            mean_peaks_per_cell: if cells == 0 {
                0.0
            } else {
                peaks as f64 / cells as f64
            },
        }
    }
}
