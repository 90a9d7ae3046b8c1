//! # portfolio-client
//!
//! Leptos + WASM frontend for a single-page personal portfolio.
//!
//! This crate contains the page, components, UI state, the canned-response
//! chat core, and browser helpers. With `ssr` it renders inside the host
//! binary; with `hydrate` it compiles to WASM and takes over in the browser.

pub mod app;
pub mod chat;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
