//! # client
//!
//! Leptos + WASM frontend for the computer monitoring system's login screen.
//!
//! This crate contains the page, its components, the form and auth state
//! models, and the REST helper for `POST /login`. The `hydrate` feature builds
//! the browser bundle; the `ssr` feature is consumed by the host server.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
