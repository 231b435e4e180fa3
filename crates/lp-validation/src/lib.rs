//! Client-side checks run before the contact form is allowed to post.

mod email;

pub use email::{MAX_DOMAIN_LEN, MAX_EMAIL_LEN, MAX_LOCAL_PART_LEN, is_valid_email};

use lp_api_types::{Field, FormSubmission};
use thiserror::Error;

pub const MIN_MESSAGE_LEN: usize = 10;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message must be at least {} characters long", MIN_MESSAGE_LEN)]
    MessageTooShort,
}

impl ValidationError {
    /// Field that should regain focus so the visitor can fix it.
    pub fn focus_field(self) -> Option<Field> {
        match self {
            ValidationError::InvalidEmail => Some(Field::Email),
            ValidationError::MissingFields | ValidationError::MessageTooShort => None,
        }
    }
}

/// Gate a submission. Checks short-circuit in order: required fields,
/// email shape, message length.
///
/// Only an empty value counts as missing; whitespace is sent as typed.
pub fn validate_submission(submission: &FormSubmission) -> Result<(), ValidationError> {
    let name = submission.field(Field::Name);
    let email = submission.field(Field::Email);
    let message = submission.field(Field::Message);

    if [name, email, message].iter().any(|value| value.is_empty()) {
        return Err(ValidationError::MissingFields);
    }

    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    if message.chars().count() < MIN_MESSAGE_LEN {
        return Err(ValidationError::MessageTooShort);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, message: &str) -> FormSubmission {
        FormSubmission::new()
            .with("name", name)
            .with("email", email)
            .with("message", message)
    }

    #[test]
    fn complete_submission_passes() {
        let ok = submission("Ada", "ada@example.com", "Hello, I'd like a quote.");
        assert_eq!(validate_submission(&ok), Ok(()));
    }

    #[test]
    fn any_empty_field_is_missing() {
        let cases = [
            submission("", "ada@example.com", "long enough message"),
            submission("Ada", "", "long enough message"),
            submission("Ada", "ada@example.com", ""),
            FormSubmission::new().with("name", "Ada"),
        ];
        for case in cases {
            assert_eq!(validate_submission(&case), Err(ValidationError::MissingFields));
        }
    }

    #[test]
    fn whitespace_only_name_is_not_missing() {
        let case = submission(" ", "a@example.com", "long enough text");
        assert_eq!(validate_submission(&case), Ok(()));
    }

    #[test]
    fn missing_fields_wins_over_bad_email() {
        let case = submission("", "not-an-email", "short");
        assert_eq!(validate_submission(&case), Err(ValidationError::MissingFields));
    }

    #[test]
    fn bad_email_reported_before_length_and_refocuses() {
        let case = submission("Ada", "a@b", "short");
        let err = validate_submission(&case).unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail);
        assert_eq!(err.focus_field(), Some(Field::Email));
    }

    #[test]
    fn message_length_boundary() {
        let nine = submission("Ada", "ada@example.com", "123456789");
        let err = validate_submission(&nine).unwrap_err();
        assert_eq!(err, ValidationError::MessageTooShort);
        assert_eq!(err.focus_field(), None);

        let ten = submission("Ada", "ada@example.com", "1234567890");
        assert_eq!(validate_submission(&ten), Ok(()));
    }

    #[test]
    fn error_text_matches_page_copy() {
        assert_eq!(
            ValidationError::MessageTooShort.to_string(),
            "Message must be at least 10 characters long"
        );
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Please fill in all required fields"
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn short_message_scenario() {
        let case = submission("Ada", "user@example.com", "short");
        assert_eq!(
            validate_submission(&case).unwrap_err().to_string(),
            "Message must be at least 10 characters long"
        );
    }
}
