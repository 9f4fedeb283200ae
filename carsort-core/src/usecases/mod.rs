mod add_home_area;
mod annotate_distances;
mod error;
mod rank_cars;
mod read_cars;
mod reconcile_list;
mod sort_cars_by_distance;

#[cfg(test)]
pub mod tests;

pub use self::{
    add_home_area::*, annotate_distances::*, error::Error, rank_cars::*, read_cars::*,
    reconcile_list::*, sort_cars_by_distance::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        dom::*,
        entities::{car::*, geo::*},
    };
}
