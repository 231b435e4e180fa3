//! Event binding.
//!
//! Turns browser events into `PageEvent`s. Handlers stay thin: they read
//! what the controller needs from the DOM and hand over.

use lp_page_core::{ClickTarget, PageEvent, drive_submission};
use tracing::error;
use wasm_bindgen::JsCast;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, MouseEvent, Node};

use crate::api::FetchTransport;
use crate::dom::{self, Elements};
use crate::effects;
use crate::state;

/// Attach a listener that lives as long as the page.
fn listen<E>(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Bind all page listeners. Call once after init.
pub fn bind_events(els: &Elements) -> Result<(), JsValue> {
    let document = gloo_utils::document();
    let window = gloo_utils::window();

    // ── Navigation ──
    {
        let els2 = els.clone();
        listen(&els.nav_toggle, "click", move |_: MouseEvent| {
            effects::dispatch(&els2, PageEvent::NavToggleClicked, None);
        })?;
    }
    {
        let els2 = els.clone();
        listen(&document, "click", move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            let click = ClickTarget {
                inside_toggle: dom::contains(&els2.nav_toggle, target.as_ref()),
                inside_panel: dom::contains(&els2.nav_links, target.as_ref()),
            };
            effects::dispatch(&els2, PageEvent::DocumentClicked(click), None);
        })?;
    }

    // ── In-page anchors ──
    for anchor in &els.anchors {
        let els2 = els.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        listen(anchor, "click", move |e: MouseEvent| {
            let target_found = href.len() > 1 && dom::query(&href).is_some();
            effects::dispatch(
                &els2,
                PageEvent::AnchorClicked {
                    href: href.clone(),
                    target_found,
                },
                Some(e.as_ref()),
            );
        })?;
    }

    // ── Navbar ──
    {
        let els2 = els.clone();
        listen(&window, "scroll", move |_: Event| {
            let offset = gloo_utils::window().scroll_y().unwrap_or_default();
            effects::dispatch(&els2, PageEvent::Scrolled { offset }, None);
        })?;
    }

    // ── Contact form ──
    {
        let els2 = els.clone();
        listen(&els.email_input, "input", move |_: Event| {
            let value = els2.email_input.value();
            effects::dispatch(&els2, PageEvent::EmailEdited { value }, None);
        })?;
    }
    {
        let els2 = els.clone();
        listen(&els.contact_form, "submit", move |e: Event| {
            // The driver runs on a later microtask, too late to stop the
            // browser's own navigation.
            e.prevent_default();
            on_submit(&els2);
        })?;
    }

    Ok(())
}

fn on_submit(els: &Elements) {
    let submission = match dom::form_submission(&els.contact_form) {
        Ok(submission) => submission,
        Err(err) => {
            error!(error = ?err, "could not read the contact form");
            return;
        }
    };
    // Resolved against the page URL; a form without `action` posts to the page.
    let action = els.contact_form.action();

    let els = els.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let controller = state::controller();
        drive_submission(&controller, &FetchTransport, &action, submission, |effects| {
            effects::apply(&els, effects, None)
        })
        .await;
    });
}
