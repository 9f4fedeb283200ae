use std::collections::HashMap;

use geojson::Feature;

use super::prelude::*;
use crate::{
    entities::home_area::{HomeArea, LegendEntry},
    gateways::map::MapWidget,
};

/// Adds a layer to the map and zooms the map to it.
pub fn add_geo_json<M: MapWidget>(map: &M, feature: &Feature) -> Result<()> {
    map.add_geo_json(feature)?;
    if let Some(bbox) = feature.geometry.as_ref().and_then(MapBbox::from_geometry) {
        map.fit_bounds(&bbox)?;
    }
    Ok(())
}

/// Shows the home area of a car sharing system on the map.
///
/// Returns the new legend entry if the map has a legend.
pub fn add_home_area<M: MapWidget>(
    map: &M,
    area: &HomeArea,
    colors: &HashMap<String, String>,
    opacity: f64,
) -> Result<Option<LegendEntry>> {
    let color = area.color(colors);
    add_geo_json(map, &area.to_feature(color, opacity))?;
    if !map.has_legend() {
        return Ok(None);
    }
    let entry = LegendEntry {
        system: area.system.clone(),
        caption: area.title(),
        color: color.to_owned(),
        opacity,
    };
    map.append_legend_entry(&entry)?;
    log::debug!("Added {}", entry.caption);
    Ok(Some(entry))
}
