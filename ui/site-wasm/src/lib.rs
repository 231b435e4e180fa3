//! Landing page behaviour, compiled to WASM.
//!
//! The page logic lives in `lp-page-core`; this crate binds it to the
//! DOM. Each concern lives in its own module.

pub mod api;
pub mod config;
pub mod dom;
pub mod effects;
pub mod events;
pub mod logging;
pub mod reveal;
pub mod state;

use lp_page_core::PageController;
use tracing::{error, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    let document = gloo_utils::document();
    if document.ready_state() != "loading" {
        return init();
    }

    let cb = Closure::once(move || {
        if let Err(err) = init() {
            gloo_console::error!("page behaviour failed to start:", err);
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Main initialisation sequence. Nothing is bound unless every required
/// element resolves.
fn init() -> Result<(), JsValue> {
    let (config, config_error) = config::load();
    logging::init(&config.log_filter);
    if let Some(err) = config_error {
        warn!(error = %format!("{err:#}"), "ignoring page config, using defaults");
    }

    let els = dom::Elements::bind(&config.selectors).inspect_err(|err| {
        error!(error = ?err, "required page element missing; behaviour not bound");
    })?;

    let reveal = config.reveal.clone();
    state::install(PageController::new(config));

    if let Err(err) = reveal::observe_sections(&els, &reveal) {
        warn!(error = ?err, "fade-in observer unavailable; sections stay visible");
    }
    events::bind_events(&els)?;

    info!(
        sections = els.sections.len(),
        anchors = els.anchors.len(),
        "page behaviour ready"
    );
    Ok(())
}
