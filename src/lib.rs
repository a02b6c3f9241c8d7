//! # simple-board-client
//!
//! Leptos + WASM frontend for the simple-board bulletin board.
//!
//! This crate contains pages, components, the session store, validation
//! rules, and the REST client for the board backend. Browser-only code sits
//! behind the `csr` feature; without it every network and storage path is
//! stubbed so the domain logic can be unit tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and mounts the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if config::ApiConfig::from_env().is_production() {
        log::Level::Warn
    } else {
        log::Level::Debug
    };
    let _ = console_log::init_with_level(level);
    log::info!("simple-board client starting");
    leptos::mount::mount_to_body(app::App);
}
