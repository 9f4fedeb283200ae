use super::prelude::*;
use crate::util::sort::{cmp_distance, DistanceTo};

/// Reordering is only meaningful if at least one car is closer.
pub const NEARBY_KM: f64 = 20.0;
/// About a 30 minutes walk.
pub const WALKABLE_KM: f64 = 2.4;
pub const WALK_MINUTES_PER_KM: f64 = 12.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub nearby_km: f64,
    pub walkable_km: f64,
    pub walk_minutes_per_km: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            nearby_km: NEARBY_KM,
            walkable_km: WALKABLE_KM,
            walk_minutes_per_km: WALK_MINUTES_PER_KM,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedCar<N> {
    pub car: Car<N>,
    /// `None` if unknown.
    pub distance_km: Option<f64>,
    pub walk_time: Option<WalkTime>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ranking<N> {
    /// Ascending by distance if `nearby`, otherwise in source order.
    pub ordered: Vec<RankedCar<N>>,
    /// At least one car is within the nearby threshold.
    pub nearby: bool,
    pub should_reorder: bool,
}

impl<N> Ranking<N> {
    pub fn nearest_is_walkable(&self) -> bool {
        self.nearby
            && self
                .ordered
                .first()
                .is_some_and(|nearest| nearest.walk_time.is_some())
    }
}

pub fn rank_cars<N>(user: GeoPoint, cars: Vec<Car<N>>, thresholds: &Thresholds) -> Ranking<N> {
    let mut ordered: Vec<_> = cars
        .into_iter()
        .map(|car| RankedCar {
            distance_km: car.distance_to(&user),
            car,
            walk_time: None,
        })
        .collect();

    let nearby = ordered
        .iter()
        .filter_map(|c| c.distance_km)
        .any(|d| d < thresholds.nearby_km);
    if !nearby {
        // No point in showing distances to cars on another continent.
        log::debug!(
            "None of {} cars is within {} km",
            ordered.len(),
            thresholds.nearby_km
        );
        return Ranking {
            ordered,
            nearby,
            should_reorder: false,
        };
    }

    // stable: cars with equal distances keep their relative order
    ordered.sort_by(|a, b| cmp_distance(a.distance_km, b.distance_km));

    for c in &mut ordered {
        c.walk_time = c
            .distance_km
            .filter(|d| *d <= thresholds.walkable_km)
            .map(|d| WalkTime::from_distance_km(d, thresholds.walk_minutes_per_km));
    }

    let should_reorder = ordered.len() > 1;
    Ranking {
        ordered,
        nearby,
        should_reorder,
    }
}
