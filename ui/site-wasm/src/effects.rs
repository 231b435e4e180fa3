//! Applies controller effects to the DOM, in order.

use gloo_timers::callback::Timeout;
use lp_page_core::{Effect, Field, MessageKind, PageConfig, PageEvent};
use tracing::{debug, warn};
use web_sys::{Event, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom::{self, Elements};
use crate::state;

/// Run `event` through the controller and apply the result.
pub fn dispatch(els: &Elements, event: PageEvent, dom_event: Option<&Event>) {
    let effects = state::handle(event);
    apply(els, effects, dom_event);
}

pub fn apply(els: &Elements, effects: Vec<Effect>, dom_event: Option<&Event>) {
    if effects.is_empty() {
        return;
    }
    // Cloned so no controller borrow is live while the DOM is touched.
    let config = state::controller().borrow().config().clone();
    for effect in effects {
        apply_one(els, &config, effect, dom_event);
    }
}

fn apply_one(els: &Elements, config: &PageConfig, effect: Effect, dom_event: Option<&Event>) {
    match effect {
        Effect::PreventDefault => {
            if let Some(event) = dom_event {
                event.prevent_default();
            }
        }
        Effect::SetNavOpen(open) => {
            dom::toggle_class(&els.nav_links, &config.classes.nav_open, open);
        }
        Effect::ScrollIntoView { selector } => scroll_into_view(&selector),
        Effect::SetSubmitBusy(busy) => {
            els.submit_button.set_disabled(busy);
            dom::set_style(
                &els.submit_text,
                "display",
                if busy { "none" } else { "inline-block" },
            );
            dom::set_style(
                &els.submit_spinner,
                "display",
                if busy { "inline-block" } else { "none" },
            );
        }
        Effect::ShowMessage { kind, text } => {
            let container = match kind {
                MessageKind::Success => &els.form_success,
                MessageKind::Error => &els.form_error,
            };
            container.set_text_content(Some(text.as_str()));
            dom::set_style(container, "display", "block");
        }
        Effect::HideMessages => {
            dom::set_style(&els.form_success, "display", "none");
            dom::set_style(&els.form_error, "display", "none");
        }
        Effect::ScheduleHide { token, after_ms } => {
            let els = els.clone();
            let timer = Timeout::new(after_ms, move || {
                dispatch(&els, PageEvent::HideTimerFired(token), None);
            });
            state::set_hide_timer(timer);
        }
        Effect::CancelHide => state::cancel_hide_timer(),
        Effect::FocusField(field) => {
            if let Some(control) = field_control(els, field) {
                let _ = control.focus();
            }
        }
        Effect::ClearForm => els.contact_form.reset(),
        Effect::SendRequest { action, .. } => {
            // Only reachable when the controller is driven without
            // `drive_submission`, which performs the request itself.
            debug!(%action, "request effect left to the submission driver");
        }
        Effect::SetFieldValidity { field, message } => {
            let message = message.as_deref().unwrap_or_default();
            let reported = field_control(els, field)
                .is_some_and(|control| dom::set_custom_validity(&control, message));
            if !reported {
                warn!(field = field.as_str(), "no control to report validity on");
            }
        }
        Effect::SetNavbarHidden(hidden) => {
            let navbar = &config.navbar;
            let transform = if hidden {
                &navbar.hidden_transform
            } else {
                &navbar.shown_transform
            };
            dom::set_style(&els.navbar, "transform", transform);
        }
        Effect::SetNavbarOpaque(opaque) => {
            let navbar = &config.navbar;
            let (background, shadow) = if opaque {
                (&navbar.opaque_background, &navbar.opaque_shadow)
            } else {
                (&navbar.transparent_background, &navbar.transparent_shadow)
            };
            dom::set_style(&els.navbar, "background", background);
            dom::set_style(&els.navbar, "box-shadow", shadow);
        }
        Effect::HideSection(index) => {
            if let Some(section) = els.sections.get(index) {
                dom::add_class(section, &config.classes.section_hidden);
            }
        }
        Effect::ObserveSection(index) => {
            if let Some(section) = els.sections.get(index) {
                state::with_observer(|observer| observer.observe(section));
            }
        }
        Effect::RevealSection(index) => {
            if let Some(section) = els.sections.get(index) {
                dom::add_class(section, &config.classes.section_revealed);
            }
        }
        Effect::UnobserveSection(index) => {
            if let Some(section) = els.sections.get(index) {
                state::with_observer(|observer| observer.unobserve(section));
            }
        }
    }
}

fn field_control(els: &Elements, field: Field) -> Option<HtmlElement> {
    match field {
        Field::Email => Some(HtmlElement::from(els.email_input.clone())),
        _ => dom::named_control(&els.contact_form, field.as_str()),
    }
}

fn scroll_into_view(selector: &str) {
    let Some(target) = dom::query(selector) else {
        debug!(selector, "scroll target vanished");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
