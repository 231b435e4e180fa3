//! DOM element bindings.
//!
//! Every element the page behaviour touches is resolved once at startup
//! from the configured selectors. To add a new element, add a field here
//! and bind it in `Elements::bind()`.

use gloo_utils::document;
use lp_api_types::FormSubmission;
use lp_page_core::config::Selectors;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, FormData, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement, Node,
};

// ── Helpers ──

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok().flatten()
}

/// All matches in document order; an invalid selector matches nothing.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Ok(list) = document().query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

/// Whether `target` is `container` itself or one of its descendants.
pub fn contains(container: &Element, target: Option<&Node>) -> bool {
    target.is_some_and(|node| container.contains(Some(node)))
}

/// The form control named `name`, if the form has one.
pub fn named_control(form: &HtmlFormElement, name: &str) -> Option<HtmlElement> {
    form.query_selector(&format!("[name=\"{name}\"]"))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Set (or clear, with an empty string) a control's custom validity
/// message. Returns `false` for controls without constraint validation.
pub fn set_custom_validity(control: &HtmlElement, message: &str) -> bool {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        input.set_custom_validity(message);
        if !message.is_empty() {
            input.report_validity();
        }
        true
    } else if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
        area.set_custom_validity(message);
        if !message.is_empty() {
            area.report_validity();
        }
        true
    } else {
        false
    }
}

/// Snapshot the form's text fields in document order. File inputs are
/// skipped.
pub fn form_submission(form: &HtmlFormElement) -> Result<FormSubmission, JsValue> {
    let data = FormData::new_with_form(form)?;
    let mut submission = FormSubmission::new();
    let Some(entries) = js_sys::try_iter(&data)? else {
        return Ok(submission);
    };
    for entry in entries {
        let pair = js_sys::Array::from(&entry?);
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            submission.insert(name, value);
        }
    }
    Ok(submission)
}

// ── Elements struct ──

/// All DOM element references used by the page behaviour.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Navigation
    pub nav_toggle: Element,
    pub nav_links: Element,
    pub navbar: HtmlElement,
    pub anchors: Vec<Element>,

    // Contact form
    pub contact_form: HtmlFormElement,
    pub submit_button: HtmlButtonElement,
    pub submit_text: HtmlElement,
    pub submit_spinner: HtmlElement,
    pub form_success: HtmlElement,
    pub form_error: HtmlElement,
    pub email_input: HtmlInputElement,

    // Fade-in targets
    pub sections: Vec<Element>,
}

macro_rules! required {
    ($root:expr, $selector:expr, $ty:ty) => {
        $root
            .query_selector($selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<$ty>().ok())
            .ok_or_else(|| {
                JsValue::from_str(&format!(
                    "missing {} matching `{}`",
                    stringify!($ty),
                    $selector
                ))
            })?
    };
}

impl Elements {
    /// Resolve all DOM references. Fails on the first required element
    /// that is absent or of the wrong kind.
    pub fn bind(selectors: &Selectors) -> Result<Elements, JsValue> {
        let doc = document();
        let form = required!(doc, &selectors.contact_form, HtmlFormElement);

        Ok(Elements {
            nav_toggle: required!(doc, &selectors.nav_toggle, Element),
            nav_links: required!(doc, &selectors.nav_links, Element),
            navbar: required!(doc, &selectors.navbar, HtmlElement),
            anchors: query_all(&selectors.anchors),

            submit_button: required!(form, &selectors.submit_button, HtmlButtonElement),
            submit_text: required!(form, &selectors.submit_text, HtmlElement),
            submit_spinner: required!(form, &selectors.submit_spinner, HtmlElement),
            form_success: required!(doc, &selectors.form_success, HtmlElement),
            form_error: required!(doc, &selectors.form_error, HtmlElement),
            email_input: required!(doc, &selectors.email_input, HtmlInputElement),
            contact_form: form,

            sections: query_all(&selectors.sections),
        })
    }

    /// Index of `el` among the fade-in sections.
    pub fn section_index(&self, el: &Element) -> Option<usize> {
        self.sections.iter().position(|section| section == el)
    }
}
