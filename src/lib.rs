//! # chartboard
//!
//! Leptos + WASM client for a clinical department's patient-record
//! dashboard. The crate's core is the session/redirect consistency layer:
//! a session store fed by the backend's auth-event stream, a storage-backed
//! redirect guard that keeps auth navigations from looping, and a protected
//! region gate that decides render-or-redirect once per mount. Pages and
//! components are thin shells over that core; patient data stays opaque.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
