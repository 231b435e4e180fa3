//! Mobile navigation panel and in-page anchor scrolling.

use crate::effect::{Effect, Transition};

/// Where a document-level click landed relative to the nav controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickTarget {
    pub inside_toggle: bool,
    pub inside_panel: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
}

impl NavState {
    pub fn on_toggle(&self) -> Transition<Self> {
        let open = !self.open;
        Transition::new(NavState { open }, vec![Effect::SetNavOpen(open)])
    }

    /// Clicks outside both the toggle and the panel force the panel closed.
    pub fn on_document_click(&self, target: ClickTarget) -> Transition<Self> {
        if target.inside_toggle || target.inside_panel {
            return Transition::unchanged(*self);
        }
        self.close()
    }

    pub fn close(&self) -> Transition<Self> {
        Transition::new(NavState { open: false }, vec![Effect::SetNavOpen(false)])
    }

    /// The default jump is always suppressed; scrolling happens only when
    /// `href` names an element that exists on the page.
    pub fn on_anchor_click(&self, href: &str, target_found: bool) -> Transition<Self> {
        let mut effects = vec![Effect::PreventDefault];
        if !target_found || href.len() < 2 || !href.starts_with('#') {
            return Transition::new(*self, effects);
        }

        effects.push(Effect::ScrollIntoView {
            selector: href.to_owned(),
        });
        let mut closed = self.close();
        effects.append(&mut closed.effects);
        Transition::new(closed.next, effects)
    }
}
