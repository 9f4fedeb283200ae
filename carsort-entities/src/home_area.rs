//! Home areas of car sharing systems.
//!
//! A home area is the region in which the cars of a system may be parked
//! at the end of a trip.

use std::collections::HashMap;

use geojson::{Feature, Geometry, JsonObject, PolygonType, Value};
use serde::Deserialize;
use serde_json::json;

use crate::geo::MapBbox;

/// Fill color of systems without a configured color.
pub const DEFAULT_FILL_COLOR: &str = "#eee";
pub const BORDER_COLOR: &str = "#999";
pub const DEFAULT_FILL_OPACITY: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HomeArea {
    pub system: String,
    /// GeoJSON `MultiPolygon` coordinates.
    pub coordinates: Vec<PolygonType>,
}

impl HomeArea {
    pub fn title(&self) -> String {
        format!("{} home area", self.system)
    }

    pub fn color<'a>(&self, colors: &'a HashMap<String, String>) -> &'a str {
        colors
            .get(&self.system)
            .map_or(DEFAULT_FILL_COLOR, String::as_str)
    }

    pub fn geometry(&self) -> Geometry {
        Geometry::new(Value::MultiPolygon(self.coordinates.clone()))
    }

    pub fn bbox(&self) -> Option<MapBbox> {
        MapBbox::from_geometry(&self.geometry())
    }

    /// A feature that carries its own `style` and `popupContent`.
    pub fn to_feature(&self, fill_color: &str, fill_opacity: f64) -> Feature {
        let mut properties = JsonObject::new();
        properties.insert("popupContent".into(), self.title().into());
        properties.insert(
            "style".into(),
            json!({
                "weight": 1,
                "color": BORDER_COLOR,
                "opacity": 1,
                "fillColor": fill_color,
                "fillOpacity": fill_opacity,
            }),
        );
        Feature {
            bbox: None,
            geometry: Some(self.geometry()),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

/// An item of the map legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub system: String,
    pub caption: String,
    pub color: String,
    pub opacity: f64,
}
