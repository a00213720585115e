// crates/yamadb-core/src/common.rs

use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the peak database.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DbStats {
    /// Total peaks in the dataset, including entries without coordinates.
    pub peaks: usize,
    /// Peaks with both latitude and longitude (the indexable subset).
    pub located: usize,
}

/// Statistics about a built spatial index.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IndexStats {
    /// Distinct exact coordinates in the index.
    pub peaks: usize,
    /// Populated grid cells.
    pub cells: usize,
    /// Mean peaks per populated cell (0.0 for an empty index).
    pub mean_peaks_per_cell: f64,
}
