use duration_str::deserialize_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("carsort.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub log: Option<Log>,
    pub geolocation: Option<Geolocation>,
    pub thresholds: Option<Thresholds>,
    pub selectors: Option<Selectors>,
    pub home_area: Option<HomeArea>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Log {
    pub level: String,
}

impl Default for Log {
    fn default() -> Self {
        Config::default().log.expect("Log configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geolocation {
    pub enable_high_accuracy: bool,
    #[serde(deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
    #[serde(deserialize_with = "deserialize_duration")]
    pub maximum_age: Duration,
}

impl Default for Geolocation {
    fn default() -> Self {
        Config::default()
            .geolocation
            .expect("Geolocation configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Thresholds {
    pub nearby_km: f64,
    pub walkable_km: f64,
    pub walk_minutes_per_km: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Config::default()
            .thresholds
            .expect("Thresholds configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Selectors {
    pub item_class: String,
    pub location_attr: String,
    pub label_class: String,
    pub template_attr: String,
    pub minutes_template_attr: String,
    pub overview_map_id: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Config::default().selectors.expect("Selectors configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HomeArea {
    pub opacity: f64,
}

impl Default for HomeArea {
    fn default() -> Self {
        Config::default().home_area.expect("Home area configuration")
    }
}
