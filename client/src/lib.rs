//! # client
//!
//! Activity request form controller for the children's activity planner.
//!
//! The controller reads the form through a [`controller::FormView`],
//! validates it with the `form` crate, posts it through a
//! [`net::api::Transport`] and renders the result or the error. Native front
//! ends supply their own view and transport; the `hydrate` feature adds the
//! DOM view, the `fetch` transport and the WASM entry point.

pub mod config;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and bind the activity form.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    if let Err(err) = pages::activity_form::mount(&config::ClientConfig::default()) {
        tracing::error!(error = %err, "activity form mount failed");
    }
}
