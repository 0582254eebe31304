//! # collably
//!
//! Leptos + WASM frontend for the Collably influencer/business collaboration
//! platform: public marketing pages, email/OTP auth, onboarding wizards, and
//! two role-specific dashboards (campaign posting/tracking for businesses,
//! campaign discovery/submission for influencers).
//!
//! All data comes from an external REST backend; this crate contains pages,
//! components, application state, and the bearer-token API layer.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point that mounts [`app::App`] onto `<body>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
