//! The page controller: owns every piece of page state and routes events
//! to the matching reducer.

use lp_api_types::FormSubmission;
use tracing::trace;

use crate::config::PageConfig;
use crate::effect::Effect;
use crate::message::{HideToken, MessageBanner};
use crate::nav::{ClickTarget, NavState};
use crate::navbar::NavbarState;
use crate::reveal::RevealTracker;
use crate::submit::{self, SubmissionOutcome, SubmitFlow, SubmitStep};

/// Everything the shell reports from the browser.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    NavToggleClicked,
    DocumentClicked(ClickTarget),
    AnchorClicked { href: String, target_found: bool },
    SectionsDiscovered { count: usize },
    SectionIntersected { index: usize, is_intersecting: bool },
    Scrolled { offset: f64 },
    EmailEdited { value: String },
    SubmitRequested {
        action: String,
        submission: FormSubmission,
    },
    SubmissionResolved(SubmissionOutcome),
    HideTimerFired(HideToken),
}

impl PageEvent {
    /// Short name for logs; never includes visitor input.
    pub fn kind(&self) -> &'static str {
        match self {
            PageEvent::NavToggleClicked => "nav_toggle_clicked",
            PageEvent::DocumentClicked(_) => "document_clicked",
            PageEvent::AnchorClicked { .. } => "anchor_clicked",
            PageEvent::SectionsDiscovered { .. } => "sections_discovered",
            PageEvent::SectionIntersected { .. } => "section_intersected",
            PageEvent::Scrolled { .. } => "scrolled",
            PageEvent::EmailEdited { .. } => "email_edited",
            PageEvent::SubmitRequested { .. } => "submit_requested",
            PageEvent::SubmissionResolved(_) => "submission_resolved",
            PageEvent::HideTimerFired(_) => "hide_timer_fired",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PageController {
    config: PageConfig,
    nav: NavState,
    navbar: NavbarState,
    reveal: RevealTracker,
    submit: SubmitFlow,
    banner: MessageBanner,
}

impl PageController {
    pub fn new(config: PageConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn nav(&self) -> NavState {
        self.nav
    }

    pub fn navbar(&self) -> NavbarState {
        self.navbar
    }

    pub fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    pub fn submit(&self) -> SubmitFlow {
        self.submit
    }

    pub fn banner(&self) -> &MessageBanner {
        &self.banner
    }

    pub fn handle(&mut self, event: PageEvent) -> Vec<Effect> {
        trace!(event = event.kind(), "page event");
        match event {
            PageEvent::NavToggleClicked => self.nav.on_toggle().commit(&mut self.nav),
            PageEvent::DocumentClicked(target) => {
                self.nav.on_document_click(target).commit(&mut self.nav)
            }
            PageEvent::AnchorClicked { href, target_found } => self
                .nav
                .on_anchor_click(&href, target_found)
                .commit(&mut self.nav),
            PageEvent::SectionsDiscovered { count } => {
                self.reveal.register(count).commit(&mut self.reveal)
            }
            PageEvent::SectionIntersected {
                index,
                is_intersecting,
            } => self
                .reveal
                .on_intersection(index, is_intersecting)
                .commit(&mut self.reveal),
            PageEvent::Scrolled { offset } => self
                .navbar
                .on_scroll(offset, &self.config.navbar)
                .commit(&mut self.navbar),
            PageEvent::EmailEdited { value } => {
                vec![submit::live_email_hint(&value, &self.config.messages)]
            }
            PageEvent::SubmitRequested { action, submission } => {
                let step = self
                    .submit
                    .on_submit(&action, submission, &self.config.messages);
                self.apply_submit_step(step)
            }
            PageEvent::SubmissionResolved(outcome) => {
                let step = self.submit.on_resolved(&outcome, &self.config.messages);
                self.apply_submit_step(step)
            }
            PageEvent::HideTimerFired(token) => {
                self.banner.on_hide_timer(token).commit(&mut self.banner)
            }
        }
    }

    fn apply_submit_step(&mut self, step: SubmitStep) -> Vec<Effect> {
        let mut effects = step.transition.commit(&mut self.submit);
        if let Some(notice) = step.notice {
            let shown = self
                .banner
                .show(notice.kind, notice.text, self.config.message_hide_ms);
            effects.extend(shown.commit(&mut self.banner));
        }
        effects
    }
}
