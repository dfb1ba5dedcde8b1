//! # client
//!
//! Leptos + WASM frontend for the event check-in kiosk. Three independent
//! page controllers — the booth print-queue board, the registered-attendee
//! list, and the walk-in form — plus login, a landing dashboard, and the
//! printable badge view.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Hydration entry point for the WASM client.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
