//! # portfolio-client
//!
//! Leptos + WASM frontend for the portfolio application. Owns the browser
//! session lifecycle (sign-in, sign-up, sign-out, bootstrap-from-storage),
//! route guarding for the authenticated views, per-call request
//! authorization, and the role-gated resource pages.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook and console logger, then
/// hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
