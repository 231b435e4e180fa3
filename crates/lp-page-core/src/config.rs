//! Page configuration.
//!
//! Every field has a default matching the stock site markup, so pages only
//! override what differs. The shell reads overrides from an inline
//! `<script type="application/json" id="page-config">` block.

use anyhow::{Context, Result, ensure};
use lp_validation::ValidationError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub classes: Classes,
    pub reveal: RevealConfig,
    pub navbar: NavbarConfig,
    pub messages: Messages,
    pub message_hide_ms: u32,
    /// `tracing` filter directive, e.g. `info` or `lp_page_core=debug`.
    pub log_filter: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            classes: Classes::default(),
            reveal: RevealConfig::default(),
            navbar: NavbarConfig::default(),
            messages: Messages::default(),
            message_hide_ms: 5_000,
            log_filter: "info".to_owned(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: PageConfig =
            serde_json::from_str(raw).context("page config is not valid JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            (0.0..=1.0).contains(&self.reveal.threshold),
            "reveal threshold must be within 0.0..=1.0, got {}",
            self.reveal.threshold
        );
        ensure!(self.message_hide_ms > 0, "message_hide_ms must be positive");
        ensure!(
            self.navbar.hide_after_px >= 0.0 && self.navbar.opaque_after_px >= 0.0,
            "navbar scroll thresholds cannot be negative"
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Selectors {
    pub nav_toggle: String,
    pub nav_links: String,
    pub navbar: String,
    pub contact_form: String,
    pub submit_button: String,
    pub submit_text: String,
    pub submit_spinner: String,
    pub form_success: String,
    pub form_error: String,
    pub email_input: String,
    pub anchors: String,
    pub sections: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav_toggle: ".nav-toggle".to_owned(),
            nav_links: ".nav-links".to_owned(),
            navbar: ".navbar".to_owned(),
            contact_form: "#contact-form".to_owned(),
            submit_button: ".submit-btn".to_owned(),
            submit_text: ".submit-text".to_owned(),
            submit_spinner: ".submit-spinner".to_owned(),
            form_success: "#form-success".to_owned(),
            form_error: "#form-error".to_owned(),
            email_input: "#email".to_owned(),
            anchors: "a[href^=\"#\"]".to_owned(),
            sections: "section".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Classes {
    pub nav_open: String,
    pub section_hidden: String,
    pub section_revealed: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            nav_open: "active".to_owned(),
            section_hidden: "fade-out".to_owned(),
            section_revealed: "fade-in".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of a section that must be visible before it fades in.
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            root_margin: "0px 0px -50px 0px".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavbarConfig {
    pub hide_after_px: f64,
    pub opaque_after_px: f64,
    pub hidden_transform: String,
    pub shown_transform: String,
    pub opaque_background: String,
    pub opaque_shadow: String,
    pub transparent_background: String,
    pub transparent_shadow: String,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            hide_after_px: 100.0,
            opaque_after_px: 50.0,
            hidden_transform: "translateY(-100%)".to_owned(),
            shown_transform: "translateY(0)".to_owned(),
            opaque_background: "rgba(255, 255, 255, 0.95)".to_owned(),
            opaque_shadow: "0 2px 4px rgba(0, 0, 0, 0.1)".to_owned(),
            transparent_background: "var(--background)".to_owned(),
            transparent_shadow: "none".to_owned(),
        }
    }
}

/// Visitor-facing copy for the contact form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Messages {
    pub missing_fields: String,
    pub invalid_email: String,
    pub message_too_short: String,
    pub success: String,
    pub fallback_error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            missing_fields: ValidationError::MissingFields.to_string(),
            invalid_email: ValidationError::InvalidEmail.to_string(),
            message_too_short: ValidationError::MessageTooShort.to_string(),
            success: "Thank you for your message! We will get back to you soon.".to_owned(),
            fallback_error: "Something went wrong. Please try again later.".to_owned(),
        }
    }
}

impl Messages {
    pub fn for_validation(&self, error: ValidationError) -> &str {
        match error {
            ValidationError::MissingFields => &self.missing_fields,
            ValidationError::InvalidEmail => &self.invalid_email,
            ValidationError::MessageTooShort => &self.message_too_short,
        }
    }
}
