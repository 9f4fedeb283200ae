use carsort_core::gateways::geolocation::{GeolocationGateway, LocationError, PositionOptions};
use carsort_entities::geo::GeoPoint;
use js_sys::{Promise, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::Geolocation;

use super::js_error_message;

// `GeolocationPositionError` codes
const PERMISSION_DENIED: u16 = 1;
const POSITION_UNAVAILABLE: u16 = 2;
const TIMEOUT: u16 = 3;

/// The position provider of the browser.
#[derive(Debug)]
pub struct BrowserGeolocation {
    geolocation: Option<Geolocation>,
}

impl BrowserGeolocation {
    pub fn new(window: &web_sys::Window) -> Self {
        let geolocation = window.navigator().geolocation().ok();
        Self { geolocation }
    }
}

impl GeolocationGateway for BrowserGeolocation {
    async fn current_position(&self, options: &PositionOptions) -> Result<GeoPoint, LocationError> {
        let geolocation = self
            .geolocation
            .as_ref()
            .ok_or(LocationError::Unsupported)?;
        let js_options = web_sys::PositionOptions::new();
        js_options.set_enable_high_accuracy(options.enable_high_accuracy);
        js_options.set_timeout(millis(options.timeout));
        js_options.set_maximum_age(millis(options.maximum_age));

        let promise = Promise::new(&mut |resolve, reject| {
            if let Err(err) = geolocation.get_current_position_with_error_callback_and_options(
                &resolve,
                Some(&reject),
                &js_options,
            ) {
                _ = reject.call1(&JsValue::UNDEFINED, &err);
            }
        });
        let position = JsFuture::from(promise)
            .await
            .map_err(|err| location_error(&err))?;
        read_position(&position)
    }
}

fn millis(duration: std::time::Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

fn number(value: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(value, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
}

fn read_position(position: &JsValue) -> Result<GeoPoint, LocationError> {
    let coords = Reflect::get(position, &JsValue::from_str("coords"))
        .map_err(|err| LocationError::Other(js_error_message(&err)))?;
    let (Some(lat), Some(lng)) = (number(&coords, "latitude"), number(&coords, "longitude")) else {
        return Err(LocationError::Other("Missing coordinates".into()));
    };
    Ok(GeoPoint::from_lat_lng_deg(lat, lng))
}

fn location_error(err: &JsValue) -> LocationError {
    let code = number(err, "code").and_then(|code| u16::try_from(code as i64).ok());
    match code {
        Some(PERMISSION_DENIED) => LocationError::PermissionDenied,
        Some(POSITION_UNAVAILABLE) => LocationError::PositionUnavailable,
        Some(TIMEOUT) => LocationError::Timeout,
        _ => LocationError::Other(js_error_message(err)),
    }
}
