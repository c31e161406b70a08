//! # portfolio-site
//!
//! Leptos + WASM client for a personal portfolio page: navigation, scroll
//! styling, reveal animations, a contact form with a `mailto:` fallback, a
//! persisted dark mode, and toast notifications.
//!
//! Browser-facing code is gated on the `csr` feature. Without it the crate
//! builds natively with no-op browser glue so the state models and decision
//! helpers can be unit tested.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    let config = config::SiteConfig::from_build_env();
    log::info!("email capability available: {}", config.email.is_available());
    leptos::mount::mount_to_body(move || view! { <App config=config.clone()/> });
}
