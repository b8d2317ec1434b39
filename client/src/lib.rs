//! # client
//!
//! Leptos frontend for Club Connect, the BRAC University club-management
//! site. Rendered on the server by the `server` crate and hydrated in the
//! browser when built with the `hydrate` feature.
//!
//! This crate owns the document shell, the root layout and navigation chrome,
//! the route-conditional background wrapper, and the route-level pages.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;
    use crate::config::SiteConfig;

    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    let config = std::sync::Arc::new(SiteConfig::default());
    leptos::mount::hydrate_body(move || view! { <App config=config/> });
}
