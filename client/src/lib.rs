//! # client
//!
//! Leptos + WASM frontend for the Flora GPT chat widget.
//!
//! This crate contains the page, components, reactive state, REST helpers,
//! and browser utilities (storage, address bar, timers, Markdown). The billing
//! and session logic it drives lives in the `protocol` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
