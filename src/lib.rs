//! # ordinal-client
//!
//! Leptos + WASM frontend for the Ordinal card-rewards tracker. Users sign
//! in, register payment cards, log transactions, and view reward rankings
//! computed by the backend.
//!
//! This crate contains pages, components, the session state layer, and the
//! REST client. All reward scoring and storage live behind the backend REST
//! API; this crate is presentation and data-fetching glue around one real
//! piece of client-owned state: the session lifecycle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
