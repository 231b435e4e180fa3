//! Page configuration lookup.
//!
//! Overrides live in `<script type="application/json" id="page-config">`.
//! A page without the block runs on defaults.

use anyhow::{Result, anyhow};
use gloo_utils::document;
use lp_page_core::PageConfig;

pub const CONFIG_ELEMENT_ID: &str = "page-config";

/// Returns the page configuration plus the error that forced a fallback
/// to defaults, if any. Logging is not up yet, so the caller reports it.
pub fn load() -> (PageConfig, Option<anyhow::Error>) {
    match read_inline() {
        Ok(Some(config)) => (config, None),
        Ok(None) => (PageConfig::default(), None),
        Err(err) => (PageConfig::default(), Some(err)),
    }
}

fn read_inline() -> Result<Option<PageConfig>> {
    let Some(script) = document().get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };
    let raw = script
        .text_content()
        .ok_or_else(|| anyhow!("#{CONFIG_ELEMENT_ID} has no text content"))?;
    if raw.trim().is_empty() {
        return Ok(None);
    }
    PageConfig::from_json(&raw).map(Some)
}
