//! Page behaviour for the marketing site, independent of any DOM.
//!
//! Every browser event the page cares about becomes a [`PageEvent`]. The
//! [`PageController`] feeds it to the reducer owning that slice of state
//! and hands back a list of [`Effect`]s for the wasm shell to apply.

pub mod config;
pub mod controller;
pub mod effect;
pub mod message;
pub mod nav;
pub mod navbar;
pub mod reveal;
pub mod submit;
pub mod transport;

pub use config::PageConfig;
pub use controller::{PageController, PageEvent};
pub use effect::{Effect, Transition};
pub use message::{HideToken, MessageBanner, MessageKind};
pub use nav::{ClickTarget, NavState};
pub use navbar::NavbarState;
pub use reveal::RevealTracker;
pub use submit::{SubmissionOutcome, SubmitFlow, SubmitPhase};
pub use transport::{
    FormTransport, TransportError, TransportReply, classify_reply, drive_submission,
};

pub use lp_api_types::{Field, FormSubmission};
