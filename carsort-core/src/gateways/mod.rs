pub mod geolocation;
pub mod map;
pub mod overview_map;
