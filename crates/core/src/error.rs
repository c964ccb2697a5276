use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The requested (date, time slot) is held by a non-cancelled booking.
    #[error("Slot conflict: {0}")]
    SlotConflict(String),

    /// Stored schedule settings cannot produce slots (server misconfiguration).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
