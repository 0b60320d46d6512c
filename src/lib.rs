//! # check-history
//!
//! Leptos + WASM client for browsing past network check results.
//!
//! The page loads the check history from the backend once, keeps it in
//! `HistoryState`, and renders a filterable list with view/repeat actions.
//! The `net` layer is transport-agnostic so the `cli` crate reuses it
//! natively over `reqwest`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
