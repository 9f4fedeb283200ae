//! Minimal bindings of the [Leaflet](https://leafletjs.com) API
//! that is expected to be loaded as global `L`.

use std::collections::HashMap;

use anyhow::{anyhow, Context as _};
use carsort_core::{
    gateways::map::{MapError, MapWidget},
    usecases,
};
use carsort_entities::{
    geo::{GeoPoint, MapBbox},
    home_area::{HomeArea, LegendEntry},
};
use geojson::{Feature, PolygonType};
use js_sys::{Array, Object, Reflect, JSON};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::js_error_message;
use crate::config::Config;

#[wasm_bindgen]
extern "C" {
    type Map;

    type Layer;

    type Control;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn new_map(id: &str) -> Result<Map, JsValue>;

    #[wasm_bindgen(catch, method, js_name = fitBounds)]
    fn fit_bounds(this: &Map, bounds: &Array) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = addControl)]
    fn add_control(this: &Map, control: &Control);

    #[wasm_bindgen(js_namespace = L, js_name = control)]
    fn new_control(options: &JsValue) -> Control;

    #[wasm_bindgen(catch, js_namespace = L, js_name = geoJson)]
    fn new_geo_json(data: &JsValue, options: &JsValue) -> Result<Layer, JsValue>;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Layer, content: &str) -> Layer;

    #[wasm_bindgen(catch, method, js_name = addTo)]
    fn add_to(this: &Layer, map: &Map) -> Result<Layer, JsValue>;
}

fn map_error(err: &JsValue) -> MapError {
    MapError(js_error_message(err))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, MapError> {
    let json = serde_json::to_string(value).map_err(|err| MapError(err.to_string()))?;
    JSON::parse(&json).map_err(|err| map_error(&err))
}

fn from_js<T: serde::de::DeserializeOwned>(value: &JsValue) -> anyhow::Result<T> {
    let json = JSON::stringify(value)
        .map_err(|err| anyhow!(js_error_message(&err)))?
        .as_string()
        .ok_or_else(|| anyhow!("Value is not serializable"))?;
    Ok(serde_json::from_str(&json)?)
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<(), MapError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|err| map_error(&err))
}

/// A Leaflet map with an optional legend list.
pub struct LeafletMap {
    map: Map,
    document: web_sys::Document,
    legend: Option<Element>,
    // called by Leaflet whenever the legend control is added
    _on_add_legend: Option<Closure<dyn Fn(JsValue) -> JsValue>>,
}

impl LeafletMap {
    pub fn new(document: web_sys::Document, div_id: &str) -> Result<Self, MapError> {
        let map = new_map(div_id).map_err(|err| map_error(&err))?;
        Ok(Self {
            map,
            document,
            legend: None,
            _on_add_legend: None,
        })
    }

    pub fn add_tile_layer(&self, tile_layer: &JsValue) -> Result<(), MapError> {
        tile_layer
            .unchecked_ref::<Layer>()
            .add_to(&self.map)
            .map(|_| ())
            .map_err(|err| map_error(&err))
    }

    /// Adds a legend control in the bottom right corner.
    pub fn add_legend(&mut self) -> Result<(), MapError> {
        let create = |tag| self.document.create_element(tag).map_err(|err| map_error(&err));
        let div = create("div")?;
        div.set_class_name("info legend");
        let ul = create("ul")?;
        div.append_child(&ul).map_err(|err| map_error(&err))?;

        let options = Object::new();
        set(&options, "position", &JsValue::from_str("bottomright"))?;
        let control = new_control(&options);
        let on_add = Closure::<dyn Fn(JsValue) -> JsValue>::new(move |_map: JsValue| -> JsValue {
            div.clone().into()
        });
        set(&control, "onAdd", on_add.as_ref())?;
        self.map.add_control(&control);

        self.legend = Some(ul);
        self._on_add_legend = Some(on_add);
        Ok(())
    }
}

impl MapWidget for LeafletMap {
    fn add_geo_json(&self, feature: &Feature) -> Result<(), MapError> {
        let data = to_js(feature)?;
        let options = Object::new();
        if let Some(style) = feature.property("style") {
            set(&options, "style", &to_js(style)?)?;
        }
        let layer = new_geo_json(&data, &options).map_err(|err| map_error(&err))?;
        if let Some(popup) = feature
            .property("popupContent")
            .and_then(serde_json::Value::as_str)
        {
            layer.bind_popup(popup);
        }
        layer.add_to(&self.map).map_err(|err| map_error(&err))?;
        Ok(())
    }

    fn fit_bounds(&self, bbox: &MapBbox) -> Result<(), MapError> {
        let corner = |p: GeoPoint| Array::of2(&p.lat().into(), &p.lng().into());
        let bounds = Array::of2(&corner(bbox.southwest()), &corner(bbox.northeast()));
        self.map.fit_bounds(&bounds).map_err(|err| map_error(&err))
    }

    fn has_legend(&self) -> bool {
        self.legend.is_some()
    }

    fn append_legend_entry(&self, entry: &LegendEntry) -> Result<(), MapError> {
        let legend = self
            .legend
            .as_ref()
            .ok_or_else(|| MapError("The map has no legend".into()))?;
        let create = |tag| self.document.create_element(tag).map_err(|err| map_error(&err));
        let LegendEntry {
            system,
            caption,
            color,
            opacity,
        } = entry;

        let li = create("li")?;
        for (name, value) in [
            ("data-name-system", system),
            ("data-name-caption", caption),
            ("data-color", color),
        ] {
            li.set_attribute(name, value).map_err(|err| map_error(&err))?;
        }
        let span = create("span")?;
        span.set_attribute("style", &format!("background: {color}; opacity: {opacity}"))
            .map_err(|err| map_error(&err))?;
        li.append_child(&span).map_err(|err| map_error(&err))?;
        li.append_with_str_1(caption).map_err(|err| map_error(&err))?;
        legend.append_child(&li).map_err(|err| map_error(&err))?;
        Ok(())
    }
}

/// A map that displays the home areas of car sharing systems.
#[wasm_bindgen]
pub struct HomeAreaMap {
    map: LeafletMap,
    colors: HashMap<String, String>,
    opacity: f64,
}

#[wasm_bindgen]
impl HomeAreaMap {
    /// `colors` maps system names to fill colors.
    #[wasm_bindgen(constructor)]
    pub fn new(
        div_id: &str,
        tile_layer: &JsValue,
        colors: &JsValue,
    ) -> Result<HomeAreaMap, JsError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsError::new("No document"))?;
        let config = crate::load_config(&document).unwrap_or_else(|err| {
            log::warn!("Invalid configuration: {err:#}");
            Config::default()
        });
        let colors = from_js(colors)
            .context("Invalid colors")
            .map_err(|err| JsError::new(&format!("{err:#}")))?;
        let mut map = LeafletMap::new(document, div_id)?;
        map.add_tile_layer(tile_layer)?;
        map.add_legend()?;
        Ok(Self {
            map,
            colors,
            opacity: config.home_area.opacity,
        })
    }

    /// Adds a GeoJSON feature and fits the map to it.
    #[wasm_bindgen(js_name = addGeoJson)]
    pub fn add_geo_json(&self, feature: &JsValue) -> Result<(), JsError> {
        let feature: Feature = from_js(feature).map_err(|err| JsError::new(&format!("{err:#}")))?;
        usecases::add_geo_json(&self.map, &feature)?;
        Ok(())
    }

    /// Adds the home area of a system given as `MultiPolygon` coordinates.
    #[wasm_bindgen(js_name = addSystemMultiPolygon)]
    pub fn add_system_multi_polygon(
        &self,
        coordinates: &JsValue,
        system_name: &str,
    ) -> Result<(), JsError> {
        let coordinates: Vec<PolygonType> = from_js(coordinates)
            .context("Invalid home area coordinates")
            .map_err(|err| JsError::new(&format!("{err:#}")))?;
        let area = HomeArea {
            system: system_name.to_owned(),
            coordinates,
        };
        let entry = usecases::add_home_area(&self.map, &area, &self.colors, self.opacity)?;
        if let Some(entry) = entry {
            log::debug!("Added legend entry {}", entry.caption);
        }
        Ok(())
    }
}
