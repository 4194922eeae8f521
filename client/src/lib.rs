//! # client
//!
//! Leptos + WASM frontend for account registration.
//!
//! Pages, the toast presenter and browser adapters live here; the draft
//! model and submission rules come from the `registration` crate. Browser
//! behavior (fetch, object URLs, timers) is compiled only with the `hydrate`
//! feature so SSR and native test builds stay deterministic.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
