use std::cmp::Ordering;

use crate::entities::{car::Car, geo::GeoPoint};

pub trait DistanceTo {
    /// Distance in km or `None` if it is unknown.
    fn distance_to(&self, pos: &GeoPoint) -> Option<f64>;
}

impl<N> DistanceTo for Car<N> {
    fn distance_to(&self, pos: &GeoPoint) -> Option<f64> {
        let location = self.location?;
        if !location.is_valid() {
            log::warn!("invalid coordinate: {}/{}", location.lat(), location.lng());
            return None;
        }
        if !pos.is_valid() {
            log::warn!("invalid coordinate: {}/{}", pos.lat(), pos.lng());
            return None;
        }
        Some(location.distance_to(pos))
    }
}

/// Unknown distances are greater than all known distances.
pub fn cmp_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
