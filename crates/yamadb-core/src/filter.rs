// crates/yamadb-core/src/filter.rs

//! Filtering rules applied to geocoder results before display.

use crate::config;
use crate::place::Place;
use std::collections::HashSet;

/// Places whose display name ends with `country`, original order kept.
pub fn by_country<'a>(places: &'a [Place], country: &str) -> Vec<&'a Place> {
    places.iter().filter(|p| p.is_in_country(country)).collect()
}

/// Places in the configured target country.
pub fn by_target_country(places: &[Place]) -> Vec<&Place> {
    by_country(places, config::TARGET_COUNTRY)
}

/// De-duplicate by place id; the first occurrence wins, order preserved.
pub fn dedup_by_id(places: &[Place]) -> Vec<&Place> {
    let mut seen = HashSet::new();
    places
        .iter()
        .filter(|p| seen.insert(p.id().as_str()))
        .collect()
}
