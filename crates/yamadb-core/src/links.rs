// crates/yamadb-core/src/links.rs

//! Deep links into external weather services.
//!
//! Pure URL construction; nothing here talks to the network. Four services
//! take a coordinate pair, the mountain-weather service (Yamaten) takes a
//! mountain id instead and is only offered when a nearby peak exists.

use crate::place::Place;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WeatherService {
    Scw,
    Windy,
    WeatherNews,
    Yamaten,
    Meteoblue,
}

impl WeatherService {
    pub const ALL: [WeatherService; 5] = [
        WeatherService::Scw,
        WeatherService::Windy,
        WeatherService::WeatherNews,
        WeatherService::Yamaten,
        WeatherService::Meteoblue,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            WeatherService::Scw => "SuperC Weather",
            WeatherService::Windy => "Windy",
            WeatherService::WeatherNews => "Weather News",
            WeatherService::Yamaten => "Yamaten (Mountain Weather)",
            WeatherService::Meteoblue => "Meteoblue",
        }
    }

    pub fn base_url(self) -> &'static str {
        match self {
            WeatherService::Scw => "https://supercweather.com",
            WeatherService::Windy => "https://www.windy.com",
            WeatherService::WeatherNews => "https://weathernews.jp",
            WeatherService::Yamaten => "https://i.yamatenki.co.jp",
            WeatherService::Meteoblue => "https://www.meteoblue.com",
        }
    }

    /// Deep-link URL for a coordinate pair. `None` for Yamaten, which is
    /// addressed by mountain id, not by coordinates.
    pub fn coordinate_url(self, lat: f64, lon: f64) -> Option<String> {
        match self {
            WeatherService::Scw => {
                Some(format!("https://supercweather.com/?lat={lat}&lng={lon}"))
            }
            WeatherService::Windy => Some(format!("https://www.windy.com/{lat}/{lon}")),
            WeatherService::WeatherNews => {
                Some(format!("https://weathernews.jp/onebox/{lat}/{lon}"))
            }
            WeatherService::Meteoblue => Some(format!(
                "https://www.meteoblue.com/en/weather/week/{lat}N{lon}E"
            )),
            WeatherService::Yamaten => None,
        }
    }
}

/// A ready-to-render deep link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherLink {
    pub service: WeatherService,
    pub name: &'static str,
    pub url: String,
}

/// Link for a coordinate-addressed service; `None` for Yamaten.
pub fn link_for(service: WeatherService, place: &Place) -> Option<WeatherLink> {
    Some(WeatherLink {
        service,
        name: service.display_name(),
        url: service.coordinate_url(place.lat(), place.lon())?,
    })
}

/// The Yamaten link, addressed by mountain id.
pub fn yamaten_link(mountain_id: &str) -> WeatherLink {
    WeatherLink {
        service: WeatherService::Yamaten,
        name: WeatherService::Yamaten.display_name(),
        url: format!("https://i.yamatenki.co.jp/mountain?mid={mountain_id}"),
    }
}

/// All available links for a place: the four coordinate services, plus
/// Yamaten when a nearby mountain id is known.
pub fn all_links(place: &Place, mountain_id: Option<&str>) -> Vec<WeatherLink> {
    links_at(place.lat(), place.lon(), mountain_id)
}

/// Coordinate-level variant of [`all_links`], for callers without a full
/// [`Place`] at hand (CLI, WASM bindings).
pub fn links_at(lat: f64, lon: f64, mountain_id: Option<&str>) -> Vec<WeatherLink> {
    let mut links: Vec<WeatherLink> = [
        WeatherService::Scw,
        WeatherService::Windy,
        WeatherService::WeatherNews,
        WeatherService::Meteoblue,
    ]
    .into_iter()
    .filter_map(|service| {
        Some(WeatherLink {
            service,
            name: service.display_name(),
            url: service.coordinate_url(lat, lon)?,
        })
    })
    .collect();

    if let Some(mid) = mountain_id {
        links.push(yamaten_link(mid));
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Coordinates;
    use crate::place::PlaceId;

    fn place() -> Place {
        Place::new(
            PlaceId::new("1").unwrap(),
            "2",
            "富士山",
            "富士山, 静岡県, 日本",
            "peak",
            Coordinates::new(35.3606, 138.7274).unwrap(),
        )
    }

    #[test]
    fn coordinate_urls() {
        let p = place();
        let scw = link_for(WeatherService::Scw, &p).unwrap();
        assert_eq!(scw.url, "https://supercweather.com/?lat=35.3606&lng=138.7274");
        let windy = link_for(WeatherService::Windy, &p).unwrap();
        assert_eq!(windy.url, "https://www.windy.com/35.3606/138.7274");
        let wn = link_for(WeatherService::WeatherNews, &p).unwrap();
        assert_eq!(wn.url, "https://weathernews.jp/onebox/35.3606/138.7274");
        let mb = link_for(WeatherService::Meteoblue, &p).unwrap();
        assert_eq!(
            mb.url,
            "https://www.meteoblue.com/en/weather/week/35.3606N138.7274E"
        );
    }

    #[test]
    fn yamaten_is_not_coordinate_addressed() {
        assert!(link_for(WeatherService::Yamaten, &place()).is_none());
        assert_eq!(
            yamaten_link("21").url,
            "https://i.yamatenki.co.jp/mountain?mid=21"
        );
    }

    #[test]
    fn all_links_without_mountain_id() {
        let links = all_links(&place(), None);
        assert_eq!(links.len(), 4);
        assert!(links.iter().all(|l| l.service != WeatherService::Yamaten));
    }

    #[test]
    fn all_links_appends_yamaten_last() {
        let links = all_links(&place(), Some("21"));
        assert_eq!(links.len(), 5);
        assert_eq!(links[4].service, WeatherService::Yamaten);
        assert_eq!(links[0].service, WeatherService::Scw);
    }
}
