//! Todo List Frontend Entry Point

mod models;
mod config;
mod storage;
mod commands;
mod context;
mod store;
mod view_model;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    if let Err(e) = console_logger::init_logger(config.log_level) {
        web_sys::console::warn_1(&e.to_string().into());
    }
    tracing::info!(storage_key = %config.storage_key, "starting todo app");

    mount_to_body(move || view! { <App config=config /> });
}
