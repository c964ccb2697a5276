//! Shared response envelope types for API handlers.
//!
//! Successful responses are a JSON object with `"success": true`, an
//! optional human-readable `message`, and the payload fields flattened
//! alongside them, e.g. `{ "success": true, "booking": { ... } }`.

use serde::Serialize;

/// Standard `{ "success": true, ...payload }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(SuccessResponse::new(BookingPayload { booking })))
/// ```
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
        }
    }
}

/// Payload for responses that carry only a message.
#[derive(Debug, Serialize)]
pub struct Empty {}
