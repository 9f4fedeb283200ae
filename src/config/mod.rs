use anyhow::{anyhow, bail, Result};
use carsort_core::{
    gateways::geolocation::PositionOptions,
    usecases::{Selectors, Settings, Thresholds},
};

mod raw;

/// Id of the optional `<script type="application/toml">` element
/// that overrides the embedded default configuration.
pub const CONFIG_ELEMENT_ID: &str = "carsort-config";

pub struct Config {
    pub log_level: log::Level,
    pub sorter: Settings,
    pub overview_map_id: String,
    pub home_area: HomeArea,
}

pub struct HomeArea {
    pub opacity: f64,
}

impl Config {
    /// Sections missing in `text` are taken from the default configuration.
    pub fn try_from_toml(text: &str) -> Result<Self> {
        let raw_config: raw::Config = toml::from_str(text)?;
        Self::try_from(raw_config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::try_from(raw::Config::default()).expect("Default configuration")
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            log,
            geolocation,
            thresholds,
            selectors,
            home_area,
        } = from;

        let raw::Log { level } = log.unwrap_or_default();
        let log_level = level
            .parse()
            .map_err(|_| anyhow!("Invalid log level '{level}'"))?;

        let raw::Geolocation {
            enable_high_accuracy,
            timeout,
            maximum_age,
        } = geolocation.unwrap_or_default();
        let position_options = PositionOptions {
            enable_high_accuracy,
            timeout,
            maximum_age,
        };

        let raw::Thresholds {
            nearby_km,
            walkable_km,
            walk_minutes_per_km,
        } = thresholds.unwrap_or_default();
        for (name, value) in [
            ("nearby-km", nearby_km),
            ("walkable-km", walkable_km),
            ("walk-minutes-per-km", walk_minutes_per_km),
        ] {
            if !(value.is_finite() && value > 0.0) {
                bail!("Invalid threshold {name} = {value}");
            }
        }
        let thresholds = Thresholds {
            nearby_km,
            walkable_km,
            walk_minutes_per_km,
        };

        let raw::Selectors {
            item_class,
            location_attr,
            label_class,
            template_attr,
            minutes_template_attr,
            overview_map_id,
        } = selectors.unwrap_or_default();
        let selectors = Selectors {
            item_class,
            location_attr,
            label_class,
            template_attr,
            minutes_template_attr,
        };

        let raw::HomeArea { opacity } = home_area.unwrap_or_default();
        if !(0.0..=1.0).contains(&opacity) {
            bail!("Invalid home area opacity {opacity}");
        }

        Ok(Self {
            log_level,
            sorter: Settings {
                position_options,
                thresholds,
                selectors,
            },
            overview_map_id,
            home_area: HomeArea { opacity },
        })
    }
}
