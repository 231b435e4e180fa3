//! Contact form submission state machine.
//!
//! `Idle -> Validating -> Submitting -> (Succeeded | Failed) -> Idle`.
//! Validation failures jump straight to `Failed` without a request. The
//! only resting states are `Idle` and `Submitting`; the others are passed
//! through within a single event and show up in the debug log.

use lp_api_types::{Field, FormSubmission};
use lp_validation::{is_valid_email, validate_submission};
use tracing::{debug, error, warn};

use crate::config::Messages;
use crate::effect::{Effect, Transition};
use crate::message::MessageKind;
use crate::transport::TransportError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// How the one outbound request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Success status with a JSON body.
    Accepted,
    /// Non-success status. `message` is the reply's `message` field, if any.
    Rejected { status: u16, message: Option<String> },
    /// Success status but the body was not JSON.
    Unreadable { status: u16 },
    Transport(TransportError),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted)
    }

    fn error_text<'a>(&'a self, messages: &'a Messages) -> &'a str {
        match self {
            SubmissionOutcome::Rejected {
                message: Some(message),
                ..
            } => message,
            _ => &messages.fallback_error,
        }
    }
}

/// Banner text a submit step wants shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: MessageKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitStep {
    pub transition: Transition<SubmitFlow>,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitFlow {
    phase: SubmitPhase,
}

impl SubmitFlow {
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn on_submit(
        &self,
        action: &str,
        submission: FormSubmission,
        messages: &Messages,
    ) -> SubmitStep {
        if self.is_submitting() {
            debug!("submit ignored while a request is in flight");
            return SubmitStep {
                transition: Transition::new(*self, vec![Effect::PreventDefault]),
                notice: None,
            };
        }

        let mut effects = vec![Effect::PreventDefault];
        log_phase(self.phase, SubmitPhase::Validating);

        if let Err(err) = validate_submission(&submission) {
            log_phase(SubmitPhase::Validating, SubmitPhase::Failed);
            debug!(reason = %err, "submission blocked by validation");
            if let Some(field) = err.focus_field() {
                effects.push(Effect::FocusField(field));
            }
            return SubmitStep {
                transition: Transition::new(SubmitFlow::idle(SubmitPhase::Failed), effects),
                notice: Some(Notice {
                    kind: MessageKind::Error,
                    text: messages.for_validation(err).to_owned(),
                }),
            };
        }

        log_phase(SubmitPhase::Validating, SubmitPhase::Submitting);
        effects.push(Effect::SetSubmitBusy(true));
        effects.push(Effect::SendRequest {
            action: action.to_owned(),
            submission,
        });

        SubmitStep {
            transition: Transition::new(
                SubmitFlow {
                    phase: SubmitPhase::Submitting,
                },
                effects,
            ),
            notice: None,
        }
    }

    /// The busy state is released whatever the outcome; fields are cleared
    /// only on success.
    pub fn on_resolved(&self, outcome: &SubmissionOutcome, messages: &Messages) -> SubmitStep {
        if !self.is_submitting() {
            debug!(phase = ?self.phase, "ignoring submission result outside of a request");
            return SubmitStep {
                transition: Transition::unchanged(*self),
                notice: None,
            };
        }

        match outcome {
            SubmissionOutcome::Rejected { status, message } => {
                warn!(status, server_message = ?message, "form endpoint rejected submission");
            }
            SubmissionOutcome::Unreadable { status } => {
                warn!(status, "form endpoint replied with a non-JSON body");
            }
            SubmissionOutcome::Transport(err) => {
                error!(error = %err, "form submission error");
            }
            SubmissionOutcome::Accepted => {}
        }

        let (phase, effects, notice) = if outcome.is_success() {
            (
                SubmitPhase::Succeeded,
                vec![Effect::ClearForm, Effect::SetSubmitBusy(false)],
                Notice {
                    kind: MessageKind::Success,
                    text: messages.success.clone(),
                },
            )
        } else {
            (
                SubmitPhase::Failed,
                vec![Effect::SetSubmitBusy(false)],
                Notice {
                    kind: MessageKind::Error,
                    text: outcome.error_text(messages).to_owned(),
                },
            )
        };
        log_phase(self.phase, phase);

        SubmitStep {
            transition: Transition::new(SubmitFlow::idle(phase), effects),
            notice: Some(notice),
        }
    }

    fn idle(from: SubmitPhase) -> Self {
        log_phase(from, SubmitPhase::Idle);
        SubmitFlow {
            phase: SubmitPhase::Idle,
        }
    }
}

/// Inline hint while the visitor types an email address. Empty input is
/// left to the required-field check on submit.
pub fn live_email_hint(value: &str, messages: &Messages) -> Effect {
    let message = (!value.is_empty() && !is_valid_email(value))
        .then(|| messages.invalid_email.clone());
    Effect::SetFieldValidity {
        field: Field::Email,
        message,
    }
}

fn log_phase(from: SubmitPhase, to: SubmitPhase) {
    debug!(?from, ?to, "submit phase");
}
