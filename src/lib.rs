//! # study-client
//!
//! Leptos + WASM frontend for the course-enrollment study platform.
//! Replaces the previous Angular SPA with a Rust-native UI layer.
//!
//! This crate contains pages, components, the session/authorization
//! boundary (token store, session context, route guard), and the typed
//! HTTP client for the platform's REST API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
