use std::sync::Arc;

use novus_events::Notifier;

use crate::admission::BookingAdmission;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: novus_db::DbPool,
    /// Booking admission and status lifecycle.
    pub admission: Arc<BookingAdmission>,
    /// Outbound notifications for the contact and newsletter flows.
    pub notifier: Arc<dyn Notifier>,
}
