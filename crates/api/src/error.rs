use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use novus_core::error::CoreError;
use novus_db::store::StoreError;
use serde_json::json;

/// Message returned to clients whenever a slot is already held.
pub const SLOT_TAKEN_MESSAGE: &str = "This time slot is already booked";

/// Message returned when an active subscriber signs up again.
pub const ALREADY_SUBSCRIBED_MESSAGE: &str = "Email is already subscribed";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `novus_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A lookup by a non-numeric key (e.g. an email address) found nothing.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The address is already an active newsletter subscriber.
    #[error("Already subscribed")]
    AlreadySubscribed,

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::SlotTaken => {
                AppError::Core(CoreError::SlotConflict(SLOT_TAKEN_MESSAGE.to_string()))
            }
            StoreError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                // Reported as a client error like any other rejected form.
                CoreError::SlotConflict(msg) => {
                    (StatusCode::BAD_REQUEST, "SLOT_CONFLICT", msg.clone())
                }
                CoreError::InvalidConfiguration(msg) => {
                    tracing::error!(error = %msg, "Invalid server configuration");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::AlreadySubscribed => (
                StatusCode::BAD_REQUEST,
                "ALREADY_SUBSCRIBED",
                ALREADY_SUBSCRIBED_MESSAGE.to_string(),
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "success": false,
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - A violation of the active-slot index maps to 400 `SLOT_CONFLICT`.
/// - A violation of the subscriber email constraint maps to 400
///   `ALREADY_SUBSCRIBED`, the same response as the handler's pre-check.
/// - Other unique constraint violations (constraint name starting with `uq_`)
///   map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            if novus_db::store::is_active_slot_violation(err) {
                return (
                    StatusCode::BAD_REQUEST,
                    "SLOT_CONFLICT",
                    SLOT_TAKEN_MESSAGE.to_string(),
                );
            }
            if novus_db::repositories::newsletter_repo::is_duplicate_email(err) {
                return (
                    StatusCode::BAD_REQUEST,
                    "ALREADY_SUBSCRIBED",
                    ALREADY_SUBSCRIBED_MESSAGE.to_string(),
                );
            }
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
