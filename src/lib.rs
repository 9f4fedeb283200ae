//! # carsort
//!
//! Sorts the cars listed on a page by their distance to the user
//! and displays the home areas of car sharing systems.
//!
//! The sorter runs as soon as the module is loaded.
//! Home area maps are created from JavaScript with `new HomeAreaMap(...)`.

use anyhow::{anyhow, Result};
use carsort_core::{
    dom::Document as _,
    gateways::overview_map::StaticMapImage,
    usecases::{sort_cars_by_distance, Outcome},
};
use wasm_bindgen::prelude::*;

mod config;
mod web;

pub use self::web::leaflet::HomeAreaMap;

use self::{
    config::{Config, CONFIG_ELEMENT_ID},
    web::{dom::WebDocument, geolocation::BrowserGeolocation},
};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (config, config_err) = match load_config(&document) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    _ = console_log::init_with_level(config.log_level);
    if let Some(err) = config_err {
        log::warn!("Invalid configuration, using defaults: {err:#}");
    }
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = sort_cars(WebDocument::new(document), &config).await {
            log::warn!("Unable to sort cars by distance: {err:#}");
        }
    });
}

/// Loads the configuration embedded in the page, if any.
pub(crate) fn load_config(document: &web_sys::Document) -> Result<Config> {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return Ok(Config::default());
    };
    Config::try_from_toml(&text)
}

async fn sort_cars(doc: WebDocument, config: &Config) -> Result<()> {
    if doc
        .elements_by_class(&config.sorter.selectors.item_class)
        .is_empty()
    {
        // Don't ask for the position on pages without cars
        log::debug!("No cars found");
        return Ok(());
    }
    let window = web_sys::window().ok_or_else(|| anyhow!("No window"))?;
    let geolocation = BrowserGeolocation::new(&window);
    let overview_map = StaticMapImage::new(&doc, config.overview_map_id.as_str());
    match sort_cars_by_distance(&doc, &geolocation, &overview_map, &config.sorter).await? {
        Outcome::LocationUnavailable(err) => {
            log::info!("Keep default order: {err}");
        }
        Outcome::NotNearby => {
            log::info!(
                "Keep default order: no car within {} km",
                config.sorter.thresholds.nearby_km
            );
        }
        Outcome::Annotated { cars } => {
            log::info!("Annotated {cars} car(s) with distances");
        }
        Outcome::Reordered { cars } => {
            log::info!("Sorted {cars} car(s) by distance");
        }
    }
    Ok(())
}
