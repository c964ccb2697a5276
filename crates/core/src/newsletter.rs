//! Newsletter subscription rules.

use crate::error::CoreError;
use crate::validation::{require_field, validate_email};

/// Window used by the "recent subscribers" statistic.
pub const RECENT_SUBSCRIBER_DAYS: i64 = 30;

/// Normalise and validate a subscriber address.
///
/// Addresses are compared case-insensitively, so they are stored lowercase.
pub fn normalize_email(email: Option<&str>) -> Result<String, CoreError> {
    let email = require_field(email, "Email")?;
    validate_email(email)?;
    Ok(email.to_lowercase())
}

/// What a subscribe request does given the current record for the address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeAction {
    /// No record exists; insert a new subscriber.
    Create,
    /// An inactive record exists; flip it back on.
    Reactivate,
    /// An active record exists; reject the request.
    AlreadySubscribed,
}

/// Decide how to handle a subscribe request.
///
/// `existing_active` is `None` when the address has never subscribed.
pub fn subscribe_action(existing_active: Option<bool>) -> SubscribeAction {
    match existing_active {
        None => SubscribeAction::Create,
        Some(false) => SubscribeAction::Reactivate,
        Some(true) => SubscribeAction::AlreadySubscribed,
    }
}
