use std::time::Duration;

use thiserror::Error;

use crate::entities::geo::GeoPoint;

/// Options of a single position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    /// How long to wait for a position.
    pub timeout: Duration,
    /// Accept cached positions up to this age.
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: false,
            timeout: Duration::from_secs(2),
            // users are unlikely to move fast
            maximum_age: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LocationError {
    #[error("Permission to access the position was denied")]
    PermissionDenied,
    #[error("The position is unavailable")]
    PositionUnavailable,
    #[error("Timeout while waiting for the position")]
    Timeout,
    #[error("Geolocation is not supported")]
    Unsupported,
    #[error("{0}")]
    Other(String),
}

#[allow(async_fn_in_trait)]
pub trait GeolocationGateway {
    async fn current_position(&self, options: &PositionOptions) -> Result<GeoPoint, LocationError>;
}
