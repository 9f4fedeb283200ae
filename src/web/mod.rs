//! Implementations of the core traits on top of the browser APIs.

pub mod dom;
pub mod geolocation;
pub mod leaflet;

use wasm_bindgen::JsValue;

/// Message of a thrown JavaScript value.
fn js_error_message(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|msg| msg.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}
