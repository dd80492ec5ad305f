//! # client
//!
//! Leptos + WASM frontend for the surcharge admin console.
//!
//! This crate contains pages, components, application state, and the typed
//! API client for the admin endpoints. The confirmation workflow controller
//! in `components::confirm_modal` gates destructive actions behind a single
//! pending confirmation.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
