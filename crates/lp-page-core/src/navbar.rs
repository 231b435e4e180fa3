//! Scroll-driven navbar: slides away while scrolling down, turns opaque once
//! the page has moved.

use crate::config::NavbarConfig;
use crate::effect::{Effect, Transition};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NavbarState {
    pub last_scroll: f64,
    pub hidden: bool,
    pub opaque: bool,
}

impl NavbarState {
    /// Only visual changes produce effects; `last_scroll` is always updated.
    pub fn on_scroll(&self, offset: f64, config: &NavbarConfig) -> Transition<Self> {
        let hidden = offset > self.last_scroll && offset > config.hide_after_px;
        let opaque = offset > config.opaque_after_px;

        let mut effects = Vec::new();
        if hidden != self.hidden {
            effects.push(Effect::SetNavbarHidden(hidden));
        }
        if opaque != self.opaque {
            effects.push(Effect::SetNavbarOpaque(opaque));
        }

        Transition::new(
            NavbarState {
                last_scroll: offset,
                hidden,
                opaque,
            },
            effects,
        )
    }
}
