//! # tunedeck
//!
//! Leptos + WASM single-page browser for a listener's music-streaming data.
//! A thin presentation layer over the remote music API: search, artist and
//! album pages, and a dashboard of top artists and tracks, gated behind a
//! token-based session restored from `localStorage` on each page load.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body into the live app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
