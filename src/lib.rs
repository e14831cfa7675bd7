use wasm_bindgen::prelude::*;

use crate::domain::logging::LogComponent;

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod format;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod presentation;

/// Installs logging, checks the catalog and mounts the page.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    domain::logging::init_logger(Box::new(infrastructure::services::ConsoleLogger::new(config::log_level())));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));

    match domain::catalog::data::validate(domain::catalog::catalog()) {
        Ok(()) => {
            log_info!(
                LogComponent::Presentation("Initialize"),
                "🚀 Premium Auto starting with {} vehicles",
                domain::catalog::catalog().len()
            );
        }
        Err(e) => {
            log_error!(LogComponent::Presentation("Initialize"), "❌ Catalog is inconsistent: {}", e);
        }
    }

    leptos::mount_to_body(app::App);
}
