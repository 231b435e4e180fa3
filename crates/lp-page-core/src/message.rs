//! Success / error banner under the contact form.
//!
//! Only one auto-hide timer is ever live. Showing a message cancels the
//! pending hide and schedules a new one tagged with a fresh [`HideToken`];
//! a timer that fires with an outdated token is ignored.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::effect::{Effect, Transition};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HideToken(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageBanner {
    visible: Option<MessageKind>,
    generation: u64,
    hide_pending: bool,
}

impl MessageBanner {
    pub fn visible(&self) -> Option<MessageKind> {
        self.visible
    }

    pub fn hide_pending(&self) -> bool {
        self.hide_pending
    }

    pub fn show(
        &self,
        kind: MessageKind,
        text: impl Into<String>,
        hide_after_ms: u32,
    ) -> Transition<Self> {
        let mut effects = Vec::with_capacity(4);
        if self.hide_pending {
            effects.push(Effect::CancelHide);
        }

        let generation = self.generation.wrapping_add(1);
        effects.push(Effect::HideMessages);
        effects.push(Effect::ShowMessage {
            kind,
            text: text.into(),
        });
        effects.push(Effect::ScheduleHide {
            token: HideToken(generation),
            after_ms: hide_after_ms,
        });

        Transition::new(
            Self {
                visible: Some(kind),
                generation,
                hide_pending: true,
            },
            effects,
        )
    }

    pub fn on_hide_timer(&self, token: HideToken) -> Transition<Self> {
        if !self.hide_pending || token.0 != self.generation {
            debug!(
                token = token.0,
                current = self.generation,
                "ignoring stale message hide timer"
            );
            return Transition::unchanged(self.clone());
        }

        Transition::new(
            Self {
                visible: None,
                generation: self.generation,
                hide_pending: false,
            },
            vec![Effect::HideMessages],
        )
    }
}
