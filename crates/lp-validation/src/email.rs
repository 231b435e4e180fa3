//! Syntactic email check used for inline form feedback.
//!
//! Advisory only: no DNS lookup, no mailbox verification, and some valid
//! internationalised addresses are rejected.

use regex::Regex;
use std::sync::LazyLock;

pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_LOCAL_PART_LEN: usize = 64;
pub const MAX_DOMAIN_LEN: usize = 255;

// local part: dot-separated atoms or one quoted segment
// domain: bracketed IPv4 literal or labels ending in a >= 2 letter TLD
// Atoms also exclude U+FEFF and the quoted segment excludes line
// terminators, matching ECMAScript `\s` and `.`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"^(([^<>()\[\]\\.,;:\s\x{FEFF}@"]+(\.[^<>()\[\]\\.,;:\s\x{FEFF}@"]+)*)"#,
        r#"|("[^\n\r\x{2028}\x{2029}]+"))"#,
        r#"@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    ))
    .expect("email pattern is a valid regex")
});

pub fn is_valid_email(candidate: &str) -> bool {
    if !EMAIL_PATTERN.is_match(candidate) {
        return false;
    }

    if candidate.chars().count() > MAX_EMAIL_LEN {
        return false;
    }

    let Some((local_part, domain)) = candidate.split_once('@') else {
        return false;
    };

    local_part.chars().count() <= MAX_LOCAL_PART_LEN && domain.chars().count() <= MAX_DOMAIN_LEN
}
