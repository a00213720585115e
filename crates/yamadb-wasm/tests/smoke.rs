// JsValue-returning exports abort when called off-wasm, so this suite only
// runs under wasm-bindgen-test (e.g. `wasm-pack test --node`).
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use yamadb_wasm::{distance_to_nearest, nearest_peak, peak_count, weather_links};

#[wasm_bindgen_test]
fn embedded_index_is_populated() {
    yamadb_wasm::start();

    let count = peak_count();
    assert!(count >= 40, "expected a populated index, got {count}");
}

#[wasm_bindgen_test]
fn nearest_peak_near_fuji() {
    let peak = nearest_peak(35.36, 138.73, Some(5.0));
    assert!(!peak.is_null());

    let d = distance_to_nearest(35.36, 138.73);
    assert!(d.is_some_and(|d| d < 1.0));
}

#[wasm_bindgen_test]
fn invalid_coordinates_yield_null() {
    assert!(nearest_peak(120.0, 0.0, Some(5.0)).is_null());
    assert!(nearest_peak(0.0, 200.0, None).is_null());
    assert!(weather_links(120.0, 0.0).is_null());
}
