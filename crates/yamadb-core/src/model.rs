// crates/yamadb-core/src/model.rs

use crate::common::DbStats;
use crate::text::fold_key;
use crate::traits::{GeoBackend, NameMatch};
use serde::{Deserialize, Serialize};

/// Raw peak entry as it comes from the dataset JSON.
///
/// Some source entries lack coordinates; they are kept in the database for
/// name search but excluded from the spatial index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeakRaw {
    /// Mountain id used by the mountain-weather service deep link.
    pub mid: String,
    /// Canonical name (usually kanji, e.g. "富士山").
    pub name: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    /// Optional reference to a geocoder place record.
    #[serde(default)]
    pub place_id: Option<String>,
    /// Romanized or alternate name (e.g. "Mt. Fuji").
    #[serde(default)]
    pub subname: Option<String>,
}

pub type PeaksRaw = Vec<PeakRaw>;

/// A peak in the normalized database.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Peak<B: GeoBackend> {
    pub mid: B::Str,
    pub name: B::Str,
    pub lat: Option<B::Float>,
    pub lon: Option<B::Float>,
    pub place_id: Option<B::Str>,
    pub subname: Option<B::Str>,
}

impl<B: GeoBackend> Peak<B> {
    /// Convenience constructor for a fully-located peak.
    pub fn new(mid: &str, name: &str, lat: f64, lon: f64) -> Self {
        Self {
            mid: B::str_from(mid),
            name: B::str_from(name),
            lat: Some(B::float_from(lat)),
            lon: Some(B::float_from(lon)),
            place_id: None,
            subname: None,
        }
    }

    pub fn mid(&self) -> &str {
        self.mid.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn subname(&self) -> Option<&str> {
        self.subname.as_ref().map(|s| s.as_ref())
    }

    pub fn place_id(&self) -> Option<&str> {
        self.place_id.as_ref().map(|s| s.as_ref())
    }

    /// `(lat, lon)` when both are present; `None` for unlocated entries.
    pub fn location(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((B::float_to_f64(lat), B::float_to_f64(lon))),
            _ => None,
        }
    }

    /// Folded substring match against the canonical name or the subname.
    pub fn matches(&self, query: &str) -> bool {
        if self.name_contains(query) {
            return true;
        }
        match self.subname() {
            Some(sub) => fold_key(sub).contains(&fold_key(query)),
            None => false,
        }
    }
}

impl<B: GeoBackend> NameMatch for Peak<B> {
    fn name_str(&self) -> &str {
        self.name.as_ref()
    }
}

/// Top-level database structure: the static list of known peaks.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PeakDb<B: GeoBackend> {
    pub peaks: Vec<Peak<B>>,
}

impl<B: GeoBackend> PeakDb<B> {
    pub fn peaks(&self) -> &[Peak<B>] {
        &self.peaks
    }

    pub fn stats(&self) -> DbStats {
        DbStats {
            peaks: self.peaks.len(),
            located: self.peaks.iter().filter(|p| p.location().is_some()).count(),
        }
    }

    /// Find a peak by its mountain id.
    pub fn find_by_mid(&self, mid: &str) -> Option<&Peak<B>> {
        self.peaks.iter().find(|p| p.mid() == mid)
    }

    /// Substring search over canonical names and subnames, query folded.
    pub fn find_by_name(&self, query: &str) -> Vec<&Peak<B>> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        // Linear scan: the dataset is a few dozen to a few hundred entries.
        self.peaks.iter().filter(|p| p.matches(query)).collect()
    }
}

/// Convert raw JSON data into a `PeakDb` using the given backend.
pub fn build_peakdb<B: GeoBackend>(raw: PeaksRaw) -> PeakDb<B> {
    let peaks = raw
        .into_iter()
        .map(|p| Peak::<B> {
            mid: B::str_from(&p.mid),
            name: B::str_from(&p.name),
            lat: p.lat.map(B::float_from),
            lon: p.lon.map(B::float_from),
            place_id: p.place_id.as_deref().map(B::str_from),
            subname: p.subname.as_deref().map(B::str_from),
        })
        .collect();

    PeakDb { peaks }
}

/// Convenient alias for the default backend.
pub type DefaultPeakDb = PeakDb<crate::traits::DefaultBackend>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::DefaultBackend;

    fn raw(mid: &str, name: &str, sub: Option<&str>, lat: Option<f64>, lon: Option<f64>) -> PeakRaw {
        PeakRaw {
            mid: mid.to_string(),
            name: name.to_string(),
            lat,
            lon,
            place_id: None,
            subname: sub.map(str::to_string),
        }
    }

    #[test]
    fn build_keeps_unlocated_entries_out_of_location() {
        let db = build_peakdb::<DefaultBackend>(vec![
            raw("1", "富士山", Some("Mt. Fuji"), Some(35.3606), Some(138.7274)),
            raw("2", "幻の山", None, None, Some(138.0)),
        ]);
        let stats = db.stats();
        assert_eq!(stats.peaks, 2);
        assert_eq!(stats.located, 1);
        assert!(db.find_by_mid("2").unwrap().location().is_none());
    }

    #[test]
    fn name_search_uses_subname() {
        let db = build_peakdb::<DefaultBackend>(vec![
            raw("1", "富士山", Some("Mt. Fuji"), Some(35.3606), Some(138.7274)),
            raw("2", "槍ヶ岳", Some("Yarigatake"), Some(36.3420), Some(137.6476)),
        ]);
        let hits = db.find_by_name("fuji");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].mid(), "1");
        assert!(db.find_by_name("").is_empty());
        assert!(db.find_by_name("  ").is_empty());
    }

    #[test]
    fn find_by_mid_is_exact() {
        let db = build_peakdb::<DefaultBackend>(vec![raw("21", "富士山", None, None, None)]);
        assert!(db.find_by_mid("21").is_some());
        assert!(db.find_by_mid("2").is_none());
    }
}
