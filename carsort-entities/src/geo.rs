use std::{fmt, num::ParseFloatError, str::FromStr};

use thiserror::Error;

/// The Earth's radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A position on the map in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(&self) -> f64 {
        self.lat
    }

    pub const fn lng(&self) -> f64 {
        self.lng
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Great-circle distance in km.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        distance(self, other)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum GeoPointParseError {
    #[error("Expected 2 comma separated coordinates but found {0}")]
    Components(usize),
    #[error("Invalid coordinate: {0}")]
    Number(#[from] ParseFloatError),
}

impl FromStr for GeoPoint {
    type Err = GeoPointParseError;

    /// Parses the `"lat,lng"` format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<_> = s.split(',').map(str::trim).collect();
        let [lat, lng] = parts[..] else {
            return Err(GeoPointParseError::Components(parts.len()));
        };
        Ok(Self::from_lat_lng_deg(lat.parse()?, lng.parse()?))
    }
}

/// Distance in km.
///
/// Non-finite coordinates result in `NaN`.
pub fn distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    distance_deg(a.lat, a.lng, b.lat, b.lng)
}

// haversine
pub fn distance_deg(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlng = (lng2 - lng1).to_radians();
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();

    let a = (dlat / 2.0).sin() * (dlat / 2.0).sin()
        + lat1.cos() * lat2.cos() * (dlng / 2.0).sin() * (dlng / 2.0).sin();
    // rounding may push `a` slightly above 1 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// A bounding box of map positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBbox {
    sw: GeoPoint,
    ne: GeoPoint,
}

impl MapBbox {
    pub const fn new(sw: GeoPoint, ne: GeoPoint) -> Self {
        Self { sw, ne }
    }

    pub const fn southwest(&self) -> GeoPoint {
        self.sw
    }

    pub const fn northeast(&self) -> GeoPoint {
        self.ne
    }

    /// The smallest box containing all points or `None` if there are none.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        points.into_iter().fold(None, |bbox, p| {
            let Some(MapBbox { sw, ne }) = bbox else {
                return Some(MapBbox::new(p, p));
            };
            Some(MapBbox::new(
                GeoPoint::from_lat_lng_deg(sw.lat.min(p.lat), sw.lng.min(p.lng)),
                GeoPoint::from_lat_lng_deg(ne.lat.max(p.lat), ne.lng.max(p.lng)),
            ))
        })
    }

    /// Bounding box of all positions of a GeoJSON geometry.
    ///
    /// GeoJSON positions are ordered `[lng, lat]`.
    pub fn from_geometry(geometry: &geojson::Geometry) -> Option<Self> {
        let mut points = Vec::new();
        collect_positions(&geometry.value, &mut points);
        Self::from_points(points)
    }
}

fn collect_positions(value: &geojson::Value, points: &mut Vec<GeoPoint>) {
    use geojson::Value as V;
    let mut push = |pos: &Vec<f64>| {
        if let [lng, lat, ..] = pos[..] {
            points.push(GeoPoint::from_lat_lng_deg(lat, lng));
        }
    };
    match value {
        V::Point(pos) => push(pos),
        V::MultiPoint(line) | V::LineString(line) => line.iter().for_each(push),
        V::MultiLineString(lines) | V::Polygon(lines) => lines.iter().flatten().for_each(push),
        V::MultiPolygon(polygons) => polygons.iter().flatten().flatten().for_each(push),
        V::GeometryCollection(geometries) => {
            for g in geometries {
                collect_positions(&g.value, points);
            }
        }
    }
}
