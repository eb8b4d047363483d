//! # stayscope-client
//!
//! Leptos + WASM frontend for StayScope account management and listing
//! comparison. Every screen renders local state, calls the external account
//! API with the stored bearer token, and shows the result.
//!
//! Browser-only code is gated on the `hydrate` feature; everything else
//! (state machines, validation, wire types) builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
