//! The single outbound request of the contact form.
//!
//! [`FormTransport`] is the seam between the controller and whatever
//! performs the POST (`fetch` in the browser, a fake in tests).

use std::cell::RefCell;

use async_trait::async_trait;
use lp_api_types::{FormSubmission, ServerReply};
use thiserror::Error;

use crate::controller::{PageController, PageEvent};
use crate::effect::Effect;
use crate::submit::SubmissionOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReply {
    pub status: u16,
    /// Whether `status` is in the 2xx range.
    pub ok: bool,
    pub body: String,
}

impl TransportReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            ok: (200..300).contains(&status),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("could not build request: {0}")]
    Request(String),
    #[error("network failure: {0}")]
    Network(String),
}

/// Posts the form's field set to `action` with `Accept: application/json`.
#[async_trait(?Send)]
pub trait FormTransport {
    async fn post_form(
        &self,
        action: &str,
        submission: &FormSubmission,
    ) -> Result<TransportReply, TransportError>;
}

/// Success needs both a 2xx status and a JSON body.
pub fn classify_reply(result: Result<TransportReply, TransportError>) -> SubmissionOutcome {
    let reply = match result {
        Ok(reply) => reply,
        Err(err) => return SubmissionOutcome::Transport(err),
    };

    // Any JSON value counts; only a rejection's `message` is looked at.
    let parsed = serde_json::from_str::<serde_json::Value>(&reply.body);
    match (reply.ok, parsed) {
        (true, Ok(_)) => SubmissionOutcome::Accepted,
        (true, Err(_)) => SubmissionOutcome::Unreadable {
            status: reply.status,
        },
        (false, parsed) => SubmissionOutcome::Rejected {
            status: reply.status,
            message: parsed
                .ok()
                .map(ServerReply::from_value)
                .and_then(|body| body.message().map(str::to_owned)),
        },
    }
}

/// Run one submit attempt end to end.
///
/// Effects are handed to `apply` as soon as they are produced, so the
/// busy state is on screen while the request is outstanding. The
/// controller is not borrowed across the await. Returns `None` when
/// nothing was sent (validation failure or a request already in flight).
pub async fn drive_submission<T>(
    controller: &RefCell<PageController>,
    transport: &T,
    action: &str,
    submission: FormSubmission,
    mut apply: impl FnMut(Vec<Effect>),
) -> Option<SubmissionOutcome>
where
    T: FormTransport + ?Sized,
{
    let effects = controller.borrow_mut().handle(PageEvent::SubmitRequested {
        action: action.to_owned(),
        submission,
    });
    let request = effects.iter().find_map(|effect| match effect {
        Effect::SendRequest { action, submission } => Some((action.clone(), submission.clone())),
        _ => None,
    });
    apply(effects);

    let (action, submission) = request?;
    let outcome = classify_reply(transport.post_form(&action, &submission).await);

    let effects = controller
        .borrow_mut()
        .handle(PageEvent::SubmissionResolved(outcome.clone()));
    apply(effects);

    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageConfig;
    use crate::message::MessageKind;
    use std::cell::Cell;

    const ACTION: &str = "https://forms.example.com/f/contact";

    struct FakeTransport {
        calls: Cell<usize>,
        reply: Result<TransportReply, TransportError>,
    }

    impl FakeTransport {
        fn replying(reply: Result<TransportReply, TransportError>) -> Self {
            Self {
                calls: Cell::new(0),
                reply,
            }
        }
    }

    #[async_trait(?Send)]
    impl FormTransport for FakeTransport {
        async fn post_form(
            &self,
            action: &str,
            submission: &FormSubmission,
        ) -> Result<TransportReply, TransportError> {
            assert_eq!(action, ACTION);
            assert!(submission.get("email").is_some());
            self.calls.set(self.calls.get() + 1);
            self.reply.clone()
        }
    }

    fn form(message: &str) -> FormSubmission {
        FormSubmission::new()
            .with("name", "Ada")
            .with("email", "ada@example.com")
            .with("message", message)
    }

    fn shown_text(effects: &[Effect]) -> Option<(MessageKind, String)> {
        effects.iter().find_map(|effect| match effect {
            Effect::ShowMessage { kind, text } => Some((*kind, text.clone())),
            _ => None,
        })
    }

    #[test]
    fn classify_accepts_ok_json() {
        let outcome = classify_reply(Ok(TransportReply::new(200, r#"{"ok":true}"#)));
        assert_eq!(outcome, SubmissionOutcome::Accepted);
    }

    #[test]
    fn classify_accepts_any_json_shape() {
        for body in ["[]", "true", r#""ok""#, "null", r#"{"message":42}"#] {
            let outcome = classify_reply(Ok(TransportReply::new(200, body)));
            assert_eq!(outcome, SubmissionOutcome::Accepted, "body {body}");
        }
    }

    #[test]
    fn classify_rejection_with_odd_body_has_no_message() {
        for body in ["[]", r#"{"message":42}"#, r#"{"message":""}"#] {
            let outcome = classify_reply(Ok(TransportReply::new(500, body)));
            assert_eq!(
                outcome,
                SubmissionOutcome::Rejected {
                    status: 500,
                    message: None,
                },
                "body {body}"
            );
        }
    }

    #[test]
    fn classify_ok_without_json_is_unreadable() {
        let outcome = classify_reply(Ok(TransportReply::new(200, "<html>thanks</html>")));
        assert_eq!(outcome, SubmissionOutcome::Unreadable { status: 200 });
    }

    #[test]
    fn classify_rejection_extracts_message() {
        let outcome = classify_reply(Ok(TransportReply::new(
            500,
            r#"{"message":"rate limited"}"#,
        )));
        assert_eq!(
            outcome,
            SubmissionOutcome::Rejected {
                status: 500,
                message: Some("rate limited".into()),
            }
        );

        let outcome = classify_reply(Ok(TransportReply::new(502, "Bad Gateway")));
        assert_eq!(
            outcome,
            SubmissionOutcome::Rejected {
                status: 502,
                message: None,
            }
        );
    }

    #[test]
    fn classify_passes_transport_errors_through() {
        let err = TransportError::Network("connection reset".into());
        assert_eq!(
            classify_reply(Err(err.clone())),
            SubmissionOutcome::Transport(err)
        );
    }

    #[tokio::test]
    async fn successful_round_trip_clears_form() {
        let controller = RefCell::new(PageController::new(PageConfig::default()));
        let transport = FakeTransport::replying(Ok(TransportReply::new(200, "{}")));
        let mut applied = Vec::new();

        let outcome = drive_submission(&controller, &transport, ACTION, form("Hello there!"), |e| {
            applied.push(e)
        })
        .await;

        assert_eq!(outcome, Some(SubmissionOutcome::Accepted));
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(applied.len(), 2);
        assert!(applied[0].contains(&Effect::SetSubmitBusy(true)));
        assert!(applied[1].contains(&Effect::ClearForm));
        assert!(applied[1].contains(&Effect::SetSubmitBusy(false)));
        assert_eq!(
            shown_text(&applied[1]).map(|(kind, _)| kind),
            Some(MessageKind::Success)
        );
        assert!(!controller.borrow().submit().is_submitting());
    }

    #[tokio::test]
    async fn validation_failure_never_hits_transport() {
        let controller = RefCell::new(PageController::new(PageConfig::default()));
        let transport = FakeTransport::replying(Ok(TransportReply::new(200, "{}")));
        let mut applied = Vec::new();

        let outcome =
            drive_submission(&controller, &transport, ACTION, form("short"), |e| applied.push(e))
                .await;

        assert_eq!(outcome, None);
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(
            shown_text(&applied[0]),
            Some((
                MessageKind::Error,
                "Message must be at least 10 characters long".into()
            ))
        );
    }

    #[tokio::test]
    async fn server_rejection_shows_server_message() {
        let controller = RefCell::new(PageController::new(PageConfig::default()));
        let transport = FakeTransport::replying(Ok(TransportReply::new(
            500,
            r#"{"message":"rate limited"}"#,
        )));
        let mut applied = Vec::new();

        drive_submission(&controller, &transport, ACTION, form("Hello there!"), |e| {
            applied.push(e)
        })
        .await;

        let last = applied.last().unwrap();
        assert_eq!(
            shown_text(last),
            Some((MessageKind::Error, "rate limited".into()))
        );
        assert!(!last.contains(&Effect::ClearForm));
        assert!(last.contains(&Effect::SetSubmitBusy(false)));
    }

    #[tokio::test]
    async fn network_failure_uses_fallback_and_releases_button() {
        let controller = RefCell::new(PageController::new(PageConfig::default()));
        let transport = FakeTransport::replying(Err(TransportError::Network(
            "TypeError: Failed to fetch".into(),
        )));
        let mut applied = Vec::new();

        let outcome = drive_submission(&controller, &transport, ACTION, form("Hello there!"), |e| {
            applied.push(e)
        })
        .await;

        assert!(matches!(outcome, Some(SubmissionOutcome::Transport(_))));
        let last = applied.last().unwrap();
        assert!(last.contains(&Effect::SetSubmitBusy(false)));
        assert_eq!(
            shown_text(last),
            Some((
                MessageKind::Error,
                "Something went wrong. Please try again later.".into()
            ))
        );
    }
}
