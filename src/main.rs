//! Tree Storefront Entry Point

mod app;
mod cart;
mod catalog;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod models;
mod store;
mod view_model;

use app::App;
use config::StorefrontConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match StorefrontConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (StorefrontConfig::default(), Some(e)),
    };

    if let Err(e) = rolling_logger::init(config.level_filter(), config.log_capacity) {
        web_sys::console::warn_1(&format!("logger not installed: {}", e).into());
    }
    if let Some(e) = config_error {
        log::warn!("{}; using defaults", e);
    }
    log::info!("Catalog API: {}", config.api_base);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
