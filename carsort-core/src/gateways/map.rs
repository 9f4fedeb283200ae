use geojson::Feature;
use thiserror::Error;

use crate::entities::{geo::MapBbox, home_area::LegendEntry};

#[derive(Debug, Error)]
#[error("Map operation failed: {0}")]
pub struct MapError(pub String);

/// An interactive map that renders GeoJSON layers.
pub trait MapWidget {
    /// Adds a layer that is styled by the `style` property of the
    /// feature and shows its `popupContent` property as popup.
    fn add_geo_json(&self, feature: &Feature) -> Result<(), MapError>;

    fn fit_bounds(&self, bbox: &MapBbox) -> Result<(), MapError>;

    fn has_legend(&self) -> bool;

    fn append_legend_entry(&self, entry: &LegendEntry) -> Result<(), MapError>;
}
