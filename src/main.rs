#![allow(warnings)]
//! Proglog Frontend Entry Point

mod app;
mod components;
mod context;
mod format;
mod logging;
mod store;

use app::App;
use leptos::prelude::*;
use proglog_core::DashboardConfig;

/// Id of the optional `<script type="application/json">` config element
const CONFIG_ELEMENT_ID: &str = "proglog-config";

fn load_config() -> DashboardConfig {
    let json = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    match json {
        Some(json) if !json.trim().is_empty() => DashboardConfig::from_json(&json).unwrap_or_else(|e| {
            log::warn!("[CONFIG] invalid {}: {}, using defaults", CONFIG_ELEMENT_ID, e);
            DashboardConfig::default()
        }),
        _ => DashboardConfig::default(),
    }
}

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);

    let config = load_config();
    logging::set_level(config.level_filter());
    log::info!("[APP] Proglog starting");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
