use super::{
    annotate_distances, prelude::*, rank_cars, read_cars, reconcile_list, Selectors, Thresholds,
};
use crate::gateways::{
    geolocation::{GeolocationGateway, LocationError, PositionOptions},
    overview_map::OverviewMapGateway,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub position_options: PositionOptions,
    pub thresholds: Thresholds,
    pub selectors: Selectors,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The page keeps its default order.
    LocationUnavailable(LocationError),
    /// No car is close enough to the user.
    NotNearby,
    /// Distances are shown but there was nothing to reorder.
    Annotated { cars: usize },
    Reordered { cars: usize },
}

/// Requests the user's position once and sorts the cars of the page by
/// their distance to it.
///
/// A failed position request is not an error: the page keeps its default order.
/// The cars are read before the page is modified, so invalid markup leaves the
/// page untouched.
pub async fn sort_cars_by_distance<D, G, M>(
    doc: &D,
    geolocation: &G,
    overview_map: &M,
    settings: &Settings,
) -> Result<Outcome>
where
    D: Document,
    G: GeolocationGateway,
    M: OverviewMapGateway,
{
    let user = match geolocation
        .current_position(&settings.position_options)
        .await
    {
        Ok(pos) => pos,
        Err(err) => {
            log::debug!("Keep default order of cars: {err}");
            return Ok(Outcome::LocationUnavailable(err));
        }
    };
    log::debug!("User position: {user}");

    let cars = read_cars(doc, &settings.selectors)?;
    let ranking = rank_cars(user, cars, &settings.thresholds);
    if !ranking.nearby {
        return Ok(Outcome::NotNearby);
    }

    // Only mark the user on the overview map if it is close to the cars,
    // otherwise the automatically sized map would become useless.
    if ranking.nearest_is_walkable() {
        overview_map.mark_user_position(user)?;
    }

    reconcile_list(doc, &ranking)?;
    let cars = annotate_distances(doc, &ranking)?;

    if ranking.should_reorder {
        Ok(Outcome::Reordered { cars })
    } else {
        Ok(Outcome::Annotated { cars })
    }
}
