//! # client
//!
//! Leptos + WASM frontend for the warehouse monitor.
//!
//! This crate contains the two pages (product list, product details), the
//! stateless cards/alert/chart components, the per-page view state, and the
//! data-access shim [`net::api::ApiClient`] that talks either to the HTTP
//! contract or to an in-browser `inventory::Store`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
