use crate::{
    geo::GeoPoint,
    template::{Template, DIST_PLACEHOLDER, MINUTES_PLACEHOLDER, MIN_PLACEHOLDER},
};

/// A car that is displayed as an item of the page's car list.
///
/// `N` is a handle of the page element. The element is owned by the
/// page: it is only repositioned and relabeled, never created or removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Car<N> {
    /// `None` if the location of the element could not be parsed.
    pub location: Option<GeoPoint>,
    pub node: N,
    pub label: DistanceLabel<N>,
}

/// The element that displays the distance of a car.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceLabel<N> {
    pub node: N,
    pub templates: DistanceTemplates,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTemplates {
    /// Contains `{dist}` and optionally `{minutes}`.
    pub distance: Template,
    /// Contains `{min}`.
    pub minutes: Option<Template>,
}

impl DistanceTemplates {
    pub fn render(&self, distance_km: f64, walk_time: Option<WalkTime>) -> String {
        let minutes = match (walk_time, &self.minutes) {
            (Some(walk_time), Some(template)) => {
                template.fill(&[(MIN_PLACEHOLDER, walk_time.minutes().to_string().as_str())])
            }
            _ => String::new(),
        };
        self.distance.fill(&[
            (DIST_PLACEHOLDER, format_km(distance_km).as_str()),
            (MINUTES_PLACEHOLDER, minutes.as_str()),
        ])
    }
}

/// Distance with one decimal digit, ties rounded away from zero.
pub fn format_km(distance_km: f64) -> String {
    let rounded = (distance_km * 10.0).round() / 10.0;
    format!("{rounded:.1}")
}

/// Estimated duration of walking to a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WalkTime(u32);

impl WalkTime {
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Rounds down to full minutes.
    pub fn from_distance_km(distance_km: f64, minutes_per_km: f64) -> Self {
        debug_assert!(distance_km >= 0.0);
        Self((distance_km * minutes_per_km).floor() as u32)
    }

    pub const fn minutes(&self) -> u32 {
        self.0
    }
}
