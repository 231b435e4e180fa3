use lp_api_types::{Field, FormSubmission};

use crate::message::{HideToken, MessageKind};

/// A DOM change requested by a reducer. The shell applies effects in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Cancel the browser's default action for the current event.
    PreventDefault,
    SetNavOpen(bool),
    ScrollIntoView {
        selector: String,
    },
    /// Disable the submit button and swap its label for the spinner, or undo both.
    SetSubmitBusy(bool),
    ShowMessage {
        kind: MessageKind,
        text: String,
    },
    /// Hide both the success and the error container.
    HideMessages,
    ScheduleHide {
        token: HideToken,
        after_ms: u32,
    },
    CancelHide,
    FocusField(Field),
    ClearForm,
    /// Performed by [`crate::drive_submission`]; shells only need it when
    /// driving the controller by hand.
    SendRequest {
        action: String,
        submission: FormSubmission,
    },
    SetFieldValidity {
        field: Field,
        message: Option<String>,
    },
    SetNavbarHidden(bool),
    SetNavbarOpaque(bool),
    HideSection(usize),
    ObserveSection(usize),
    RevealSection(usize),
    UnobserveSection(usize),
}

/// Result of a reducer: the state to store and what to do to the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S> {
    pub next: S,
    pub effects: Vec<Effect>,
}

impl<S> Transition<S> {
    pub fn new(next: S, effects: Vec<Effect>) -> Self {
        Self { next, effects }
    }

    pub fn unchanged(next: S) -> Self {
        Self {
            next,
            effects: Vec::new(),
        }
    }

    /// Store `next` into `slot` and yield the effects.
    pub fn commit(self, slot: &mut S) -> Vec<Effect> {
        *slot = self.next;
        self.effects
    }
}
