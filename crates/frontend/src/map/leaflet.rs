// ============================================================================
// LEAFLET FFI
// ============================================================================
// Только обёртки над глобальным `L` из leaflet.js, без состояния и логики
// ============================================================================

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `L.Map`
    #[derive(Debug, Clone)]
    pub type LeafletMap;

    /// Any `L.Layer`: tile layer, GeoJSON layer or feature group
    #[derive(Debug, Clone)]
    pub type Layer;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn create_map(element: &web_sys::HtmlElement, options: &JsValue) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = fitBounds)]
    pub fn fit_bounds(this: &LeafletMap, bounds: &JsValue, options: &JsValue) -> LeafletMap;

    #[wasm_bindgen(method, js_name = flyToBounds)]
    pub fn fly_to_bounds(this: &LeafletMap, bounds: &JsValue, options: &JsValue) -> LeafletMap;

    #[wasm_bindgen(method, js_name = removeLayer)]
    pub fn remove_layer(this: &LeafletMap, layer: &Layer) -> LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = geoJSON)]
    pub fn geo_json(data: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = featureGroup)]
    pub fn feature_group() -> Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Layer, map: &LeafletMap) -> Layer;

    #[wasm_bindgen(method, js_name = addLayer)]
    pub fn add_layer(this: &Layer, layer: &Layer) -> Layer;

    #[wasm_bindgen(method, js_name = setStyle)]
    pub fn set_style(this: &Layer, style: &JsValue) -> Layer;

    #[wasm_bindgen(method, js_name = bindTooltip)]
    pub fn bind_tooltip(this: &Layer, content: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(method, js_name = bringToFront)]
    pub fn bring_to_front(this: &Layer) -> Layer;

    #[wasm_bindgen(method)]
    pub fn on(this: &Layer, event: &str, handler: &js_sys::Function) -> Layer;
}

/// Serialize for Leaflet: maps become plain JS objects, not `Map`
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> JsValue {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    match value.serialize(&serializer) {
        Ok(js) => js,
        Err(e) => {
            log::error!("Failed to serialize value for Leaflet: {}", e);
            JsValue::UNDEFINED
        }
    }
}
