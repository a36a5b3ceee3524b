//! # client
//!
//! Leptos + WASM frontend for the ChessMaster web app.
//!
//! This crate contains the chess board model, pages, components, and UI
//! state. It is compiled twice: with `ssr` for the server binary and with
//! `hydrate` for the browser bundle.

pub mod app;
pub mod chess;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the console logger and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating ChessMaster");
    leptos::mount::hydrate_body(app::App);
}
