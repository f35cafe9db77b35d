//! # dermagenie-widget
//!
//! Leptos + WASM floating chat widget for the DermaGenie skin-health
//! assistant. A trigger button opens a panel where visitors ask questions;
//! each question is posted with the running transcript to the chat backend
//! and the reply is rendered as a formatted bubble.
//!
//! Browser-only code sits behind the `csr` feature. Without it the crate
//! builds natively so state, formatting, and the controller can be tested
//! with plain `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the widget.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    app::run();
}
