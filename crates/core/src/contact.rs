//! Contact message status constants and validation.

use crate::error::CoreError;
use crate::validation::{require_field, validate_email};

/// Status of a message nobody has opened yet.
pub const STATUS_NEW: &str = "new";
/// Message has been read by an administrator.
pub const STATUS_READ: &str = "read";
/// The sender has received a reply.
pub const STATUS_RESPONDED: &str = "responded";

/// All valid contact message statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_NEW, STATUS_READ, STATUS_RESPONDED];

/// Maximum length of the free-text message body (characters).
pub const MAX_MESSAGE_LENGTH: usize = 5_000;

/// Share of messages that have been answered, as a percentage with two
/// decimals. Zero when there are no messages.
pub fn response_rate(responded: i64, total: i64) -> f64 {
    crate::stats::percentage(responded, total)
}

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Invalid status. Must be: new, read, or responded".to_string(),
        ))
    }
}

/// Validate the required fields of a contact form submission.
pub fn validate_submission(
    name: Option<&str>,
    email: Option<&str>,
    message: Option<&str>,
) -> Result<(), CoreError> {
    if name.is_none_or(|v| v.trim().is_empty())
        || email.is_none_or(|v| v.trim().is_empty())
        || message.is_none_or(|v| v.trim().is_empty())
    {
        return Err(CoreError::Validation(
            "Name, email, and message are required".to_string(),
        ));
    }

    let email = require_field(email, "Email")?;
    validate_email(email)?;

    let message = require_field(message, "Message")?;
    if message.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Message exceeds maximum length of {MAX_MESSAGE_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_pass() {
        for status in VALID_STATUSES {
            assert!(validate_status(status).is_ok());
        }
        assert!(validate_status("archived").is_err());
    }

    #[test]
    fn submission_requires_name_email_and_message() {
        assert!(validate_submission(Some("Ada"), Some("ada@example.com"), Some("Hi")).is_ok());
        assert!(validate_submission(None, Some("ada@example.com"), Some("Hi")).is_err());
        assert!(validate_submission(Some("Ada"), Some("ada@example.com"), Some("  ")).is_err());
        assert!(validate_submission(Some("Ada"), Some("not-an-email"), Some("Hi")).is_err());
    }

    #[test]
    fn overlong_message_is_rejected() {
        let long = "x".repeat(MAX_MESSAGE_LENGTH + 1);
        assert!(validate_submission(Some("Ada"), Some("ada@example.com"), Some(&long)).is_err());
    }

    #[test]
    fn response_rate_counts_responded_over_total() {
        assert_eq!(response_rate(0, 0), 0.0);
        assert_eq!(response_rate(1, 3), 33.33);
        assert_eq!(response_rate(3, 3), 100.0);
    }
}
