//! Sorting the car list of a page by the distance to the user.
//!
//! The page, the position provider and the map are passed in
//! as implementations of the traits in [`dom`] and [`gateways`].

pub mod dom;
pub mod gateways;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use carsort_entities::*;
}
