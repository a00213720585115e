// crates/yamadb-core/src/place.rs

use crate::config;
use crate::coords::Coordinates;
use crate::error::{GeoError, Result};
use serde::{Deserialize, Serialize};

/// Unique identifier of a geocoded place. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(String);

impl PlaceId {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(GeoError::EmptyPlaceId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Flat serialization shape for a place, matching the geocoder record
/// (`place_id`, `osm_id`, `addresstype`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub place_id: String,
    pub osm_id: String,
    pub name: String,
    pub display_name: String,
    pub addresstype: String,
    pub lat: f64,
    pub lon: f64,
}

/// A geocoded place: a named location with validated coordinates.
#[derive(Debug, Clone)]
pub struct Place {
    id: PlaceId,
    osm_id: String,
    name: String,
    display_name: String,
    address_type: String,
    coordinates: Coordinates,
}

impl Place {
    pub fn new(
        id: PlaceId,
        osm_id: impl Into<String>,
        name: impl Into<String>,
        display_name: impl Into<String>,
        address_type: impl Into<String>,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            id,
            osm_id: osm_id.into(),
            name: name.into(),
            display_name: display_name.into(),
            address_type: address_type.into(),
            coordinates,
        }
    }

    /// Validate and build a place from its flat record shape.
    pub fn from_record(record: PlaceRecord) -> Result<Self> {
        Ok(Self {
            id: PlaceId::new(record.place_id)?,
            osm_id: record.osm_id,
            name: record.name,
            display_name: record.display_name,
            address_type: record.addresstype,
            coordinates: Coordinates::new(record.lat, record.lon)?,
        })
    }

    pub fn to_record(&self) -> PlaceRecord {
        PlaceRecord {
            place_id: self.id.to_string(),
            osm_id: self.osm_id.clone(),
            name: self.name.clone(),
            display_name: self.display_name.clone(),
            addresstype: self.address_type.clone(),
            lat: self.coordinates.lat(),
            lon: self.coordinates.lon(),
        }
    }

    pub fn id(&self) -> &PlaceId {
        &self.id
    }

    pub fn osm_id(&self) -> &str {
        &self.osm_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn address_type(&self) -> &str {
        &self.address_type
    }

    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    pub fn lat(&self) -> f64 {
        self.coordinates.lat()
    }

    pub fn lon(&self) -> f64 {
        self.coordinates.lon()
    }

    /// The geocoder appends the country as the last display-name component.
    pub fn is_in_country(&self, country: &str) -> bool {
        self.display_name.ends_with(country)
    }

    pub fn is_in_target_country(&self) -> bool {
        self.is_in_country(config::TARGET_COUNTRY)
    }

    /// Display-name components without the trailing country and without
    /// postal codes. Only meaningful for Japanese-locale display names
    /// (ending in "日本"); anything else yields no parts.
    pub fn address_parts(&self) -> Vec<&str> {
        if !self.display_name.ends_with("日本") {
            return Vec::new();
        }
        let mut parts: Vec<&str> = self.display_name.split(", ").collect();
        parts.pop(); // trailing country
        parts.retain(|p| *p != "日本" && !is_postal_code(p));
        parts
    }

    /// Japan-style address: components reversed, largest region first.
    pub fn formatted_address(&self) -> String {
        let mut parts = self.address_parts();
        parts.reverse();
        parts.join(" ")
    }
}

impl PartialEq for Place {
    /// Identity is the place id, not the coordinates.
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Place {}

/// Matches Japanese postal codes of the form `NNN-NNNN`.
fn is_postal_code(part: &str) -> bool {
    let b = part.as_bytes();
    b.len() == 8
        && b[..3].iter().all(u8::is_ascii_digit)
        && b[3] == b'-'
        && b[4..].iter().all(u8::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(display_name: &str) -> Place {
        Place::new(
            PlaceId::new("1001").unwrap(),
            "2001",
            "河口湖",
            display_name,
            "lake",
            Coordinates::new(35.5, 138.75).unwrap(),
        )
    }

    #[test]
    fn place_id_rejects_empty() {
        assert!(PlaceId::new("").is_err());
        assert!(PlaceId::new("   ").is_err());
        assert!(PlaceId::new("42").is_ok());
    }

    #[test]
    fn country_predicate_checks_display_name_suffix() {
        let p = place("Kawaguchiko, Yamanashi, Japan");
        assert!(p.is_in_country("Japan"));
        assert!(p.is_in_target_country());
        assert!(!p.is_in_country("France"));
    }

    #[test]
    fn address_parts_strip_country_and_postal_code() {
        let p = place("河口湖, 富士河口湖町, 南都留郡, 山梨県, 401-0301, 日本");
        assert_eq!(p.address_parts(), vec!["河口湖", "富士河口湖町", "南都留郡", "山梨県"]);
        assert_eq!(p.formatted_address(), "山梨県 南都留郡 富士河口湖町 河口湖");
    }

    #[test]
    fn non_japanese_display_name_has_no_parts() {
        let p = place("Kawaguchiko, Yamanashi, Japan");
        assert!(p.address_parts().is_empty());
        assert_eq!(p.formatted_address(), "");
    }

    #[test]
    fn record_round_trip() {
        let p = place("河口湖, 山梨県, 日本");
        let r = p.to_record();
        let back = Place::from_record(r).unwrap();
        assert_eq!(p, back);
        assert_eq!(back.lat(), 35.5);
        assert_eq!(back.address_type(), "lake");
    }

    #[test]
    fn record_with_bad_coordinates_fails() {
        let r = PlaceRecord {
            place_id: "1".into(),
            osm_id: "2".into(),
            name: "x".into(),
            display_name: "x".into(),
            addresstype: "node".into(),
            lat: 120.0,
            lon: 0.0,
        };
        assert!(matches!(
            Place::from_record(r),
            Err(GeoError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn equality_is_by_id() {
        let a = place("A, 日本");
        let b = place("B, 日本");
        assert_eq!(a, b);
    }

    #[test]
    fn postal_code_shape() {
        assert!(is_postal_code("401-0301"));
        assert!(!is_postal_code("4010301"));
        assert!(!is_postal_code("40-10301"));
        assert!(!is_postal_code("401-03011"));
        assert!(!is_postal_code("山梨県"));
    }
}
