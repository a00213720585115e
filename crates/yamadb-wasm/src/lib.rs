//! yamadb-wasm — WebAssembly bindings for yamadb-core
//!
//! Exposes the mountain proximity queries to JavaScript. The dataset is
//! embedded in the binary and indexed once on module load.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { peak_count, nearest_peak, weather_links } from 'yamadb-wasm';
//!
//! async function main() {
//!   await init(); // builds the embedded index
//!   console.log('Peaks:', peak_count());
//!
//!   // null when nothing is within 5 km (or outside the grid window)
//!   const peak = nearest_peak(35.3606, 138.7274, 5.0);
//!   console.log(peak);
//!
//!   // deep links for a coordinate; includes the mountain-weather link
//!   // when a peak is near
//!   console.log(weather_links(35.396, 138.733));
//! }
//! main();
//! ```
//!
//! All exported functions return plain types or a `JsValue` holding a
//! JSON-serializable object, `null` standing in for "no result".

use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

use serde_json::json;
use serde_wasm_bindgen::to_value;
use yamadb_core::prelude::*;
use yamadb_core::{build_peakdb, config, links};

// The JSON dataset bundled with yamadb-core, embedded at compile time.
static EMBEDDED_DATA: &[u8] = include_bytes!("../../yamadb-core/data/mountains.json");

static SERVICE: OnceLock<ProximityService<DefaultBackend>> = OnceLock::new();

fn service() -> &'static ProximityService<DefaultBackend> {
    SERVICE.get_or_init(|| {
        let raw = serde_json::from_slice(EMBEDDED_DATA).expect("embedded dataset parses");
        ProximityService::new(build_peakdb::<DefaultBackend>(raw))
    })
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let stats = service().index().stats();
    web_sys::console::log_1(
        &format!(
            "yamadb: indexed {} peaks in {} cells",
            stats.peaks, stats.cells
        )
        .into(),
    );
}

fn peak_json(peak: &Peak<DefaultBackend>, distance_km: Option<f64>) -> JsValue {
    let (lat, lon) = peak.location().expect("indexed peaks are located");
    to_value(&json!({
        "mid": peak.mid(),
        "name": peak.name(),
        "subname": peak.subname(),
        "lat": lat,
        "lon": lon,
        "distance_km": distance_km,
    }))
    .expect("serializable peak")
}

/* --------------------------------------------------------------------------
   Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn peak_count() -> usize {
    service().index().stats().peaks
}

/// Nearest peak within `max_km` of the coordinate, or `null`.
/// Pass `undefined` for `max_km` to search without a threshold (the grid
/// neighborhood still bounds the search).
#[wasm_bindgen]
pub fn nearest_peak(lat: f64, lon: f64, max_km: Option<f64>) -> JsValue {
    let query = match Coordinates::new(lat, lon) {
        Ok(c) => c,
        Err(_) => return JsValue::NULL,
    };
    let svc = service();
    let hit = match max_km {
        Some(max) => svc.nearest_within(&query, max),
        None => svc.nearest(&query),
    };
    match hit {
        Some(peak) => {
            let d = peak
                .location()
                .map(|(plat, plon)| yamadb_core::haversine_km(lat, lon, plat, plon));
            peak_json(peak, d)
        }
        None => JsValue::NULL,
    }
}

/// Distance in kilometers to the nearest known peak, or `null`.
#[wasm_bindgen]
pub fn distance_to_nearest(lat: f64, lon: f64) -> Option<f64> {
    let query = Coordinates::new(lat, lon).ok()?;
    service().distance_to_nearest(&query)
}

/// Peaks whose name or romanized subname contains the query.
#[wasm_bindgen]
pub fn search_peaks(query: &str) -> JsValue {
    let hits: Vec<_> = service()
        .index()
        .peaks()
        .filter(|p| p.matches(query))
        .map(|p| {
            json!({
                "mid": p.mid(),
                "name": p.name(),
                "subname": p.subname(),
            })
        })
        .collect();
    to_value(&hits).expect("serializable hits")
}

/// Weather-service deep links for a coordinate. Includes the
/// mountain-weather link when a peak is within the proximity threshold.
#[wasm_bindgen]
pub fn weather_links(lat: f64, lon: f64) -> JsValue {
    let query = match Coordinates::new(lat, lon) {
        Ok(c) => c,
        Err(_) => return JsValue::NULL,
    };
    let mid = service()
        .nearest_within(&query, config::PROXIMITY_THRESHOLD_KM)
        .map(|p| p.mid().to_string());
    to_value(&links::links_at(lat, lon, mid.as_deref())).expect("serializable links")
}
