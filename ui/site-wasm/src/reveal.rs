//! Fade-in observer for page sections.

use js_sys::Array;
use lp_page_core::PageEvent;
use lp_page_core::config::RevealConfig;
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::Elements;
use crate::effects;
use crate::state;

/// Create the observer and register every section with the controller,
/// which hides and observes them.
pub fn observe_sections(els: &Elements, config: &RevealConfig) -> Result<(), JsValue> {
    if els.sections.is_empty() {
        debug!("no sections to reveal");
        return Ok(());
    }

    let els_cb = els.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let Some(index) = els_cb.section_index(&entry.target()) else {
                continue;
            };
            effects::dispatch(
                &els_cb,
                PageEvent::SectionIntersected {
                    index,
                    is_intersecting: entry.is_intersecting(),
                },
                None,
            );
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.threshold));
    init.set_root_margin(&config.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    state::set_observer(observer);
    effects::dispatch(
        els,
        PageEvent::SectionsDiscovered {
            count: els.sections.len(),
        },
        None,
    );
    Ok(())
}
