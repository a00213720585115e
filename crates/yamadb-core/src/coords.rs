// crates/yamadb-core/src/coords.rs

use crate::error::{GeoError, Result};
use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// A validated geographic coordinate pair.
///
/// Construction fails with [`GeoError::InvalidCoordinate`] outside
/// `lat ∈ [-90, 90]`, `lon ∈ [-180, 180]`. Equality is exact floating-point
/// equality of both fields; there is no tolerance. This is deliberate: the
/// exact-match table of the spatial index only catches literal re-queries of
/// a known point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    lat: f64,
    lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(GeoError::InvalidCoordinate { lat, lon });
        }
        Ok(Self { lat, lon })
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Great-circle distance to `other` in kilometers.
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        haversine_km(self.lat, self.lon, other.lat, other.lon)
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Haversine great-circle distance between two points, in kilometers.
///
/// Accurate to well under the sub-kilometer thresholds this crate works
/// with; symmetric in its arguments.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1.0 near antipodal points, where
    // asin would return NaN.
    2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range() {
        assert!(Coordinates::new(90.1, 0.0).is_err());
        assert!(Coordinates::new(-91.0, 0.0).is_err());
        assert!(Coordinates::new(0.0, 180.5).is_err());
        assert!(Coordinates::new(0.0, -181.0).is_err());
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn equality_is_exact() {
        let a = Coordinates::new(35.36, 138.73).unwrap();
        let b = Coordinates::new(35.36, 138.73).unwrap();
        let c = Coordinates::new(35.360000001, 138.73).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn haversine_known_distance() {
        // Tokyo Station to Shin-Osaka is roughly 400 km.
        let d = haversine_km(35.6812, 139.7671, 34.7335, 135.5003);
        assert!((390.0..410.0).contains(&d), "got {d}");
    }

    #[test]
    fn haversine_is_symmetric() {
        let d1 = haversine_km(35.3606, 138.7274, 36.2911, 137.6476);
        let d2 = haversine_km(36.2911, 137.6476, 35.3606, 138.7274);
        assert!((d1 - d2).abs() < 1e-6);
    }

    #[test]
    fn haversine_zero_for_identical_points() {
        assert_eq!(haversine_km(35.36, 138.73, 35.36, 138.73), 0.0);
    }

    #[test]
    fn haversine_finite_at_antipodes() {
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;

        // Exact and near-antipodal pairs must cap at half the circumference
        // instead of producing NaN.
        let pairs = [
            (90.0, 0.0, -90.0, 0.0),
            (0.0, 0.0, 0.0, 180.0),
            (0.0, 0.0, 1e-9, 180.0),
            (35.3606, 138.7274, -35.3606, -41.2726),
            (12.345678, -60.0, -12.345678, 120.0),
        ];
        for (lat1, lon1, lat2, lon2) in pairs {
            let d = haversine_km(lat1, lon1, lat2, lon2);
            assert!(d.is_finite(), "({lat1},{lon1})-({lat2},{lon2}) gave {d}");
            assert!(
                (d - half_circumference).abs() < 1.0,
                "({lat1},{lon1})-({lat2},{lon2}) gave {d}"
            );
        }
    }
}
