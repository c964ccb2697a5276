//! Storage seam used by booking admission.
//!
//! [`BookingStore`] is the narrow set of queries admission needs. The
//! PostgreSQL implementation delegates to [`BookingRepo`] and
//! [`ScheduleSettingsRepo`] and translates a violation of the active-slot
//! index into [`StoreError::SlotTaken`], so callers never inspect raw
//! database error codes.

use async_trait::async_trait;
use novus_core::booking::BookingStatus;
use novus_core::slots::ScheduleSettings;
use novus_core::types::{BookingDate, DbId};

use crate::models::booking::{Booking, NewBooking};
use crate::repositories::{BookingRepo, ScheduleSettingsRepo};
use crate::DbPool;

/// Partial unique index allowing one non-cancelled booking per slot.
pub const ACTIVE_SLOT_CONSTRAINT: &str = "uq_bookings_active_slot";

/// PostgreSQL `unique_violation` SQLSTATE.
pub(crate) const UNIQUE_VIOLATION: &str = "23505";

/// Error type for [`BookingStore`] operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Another non-cancelled booking already holds the slot.
    #[error("time slot is already held by another booking")]
    SlotTaken,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Whether `err` is a violation of the active-slot unique index.
pub fn is_active_slot_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
                && db_err.constraint() == Some(ACTIVE_SLOT_CONSTRAINT)
        }
        _ => false,
    }
}

fn translate(err: sqlx::Error) -> StoreError {
    if is_active_slot_violation(&err) {
        StoreError::SlotTaken
    } else {
        StoreError::Database(err)
    }
}

/// Persistence operations needed to admit bookings and change their status.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Current working-hours settings. Never cached by callers.
    async fn schedule_settings(&self) -> Result<ScheduleSettings, StoreError>;

    /// Non-cancelled booking holding `(date, time_slot)`, if any.
    async fn find_active_by_slot(
        &self,
        date: BookingDate,
        time_slot: &str,
    ) -> Result<Option<Booking>, StoreError>;

    /// All non-cancelled bookings on `date`.
    async fn find_active_by_date(&self, date: BookingDate) -> Result<Vec<Booking>, StoreError>;

    /// Persist a new `pending` booking.
    ///
    /// Must fail with [`StoreError::SlotTaken`] if the slot is held.
    async fn insert(&self, booking: &NewBooking) -> Result<Booking, StoreError>;

    /// Change a booking's status. `Ok(None)` if the ID is unknown.
    ///
    /// Fails with [`StoreError::SlotTaken`] when re-opening a cancelled
    /// booking whose slot has been taken since.
    async fn update_status(
        &self,
        id: DbId,
        status: BookingStatus,
    ) -> Result<Option<Booking>, StoreError>;
}

/// [`BookingStore`] backed by the PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgBookingStore {
    pool: DbPool,
}

impl PgBookingStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn schedule_settings(&self) -> Result<ScheduleSettings, StoreError> {
        let row = ScheduleSettingsRepo::get(&self.pool).await?;
        Ok(row.map(Into::into).unwrap_or_else(|| {
            tracing::warn!("schedule_settings row missing, using defaults");
            ScheduleSettings::default()
        }))
    }

    async fn find_active_by_slot(
        &self,
        date: BookingDate,
        time_slot: &str,
    ) -> Result<Option<Booking>, StoreError> {
        Ok(BookingRepo::find_active_by_slot(&self.pool, date, time_slot).await?)
    }

    async fn find_active_by_date(&self, date: BookingDate) -> Result<Vec<Booking>, StoreError> {
        Ok(BookingRepo::find_active_by_date(&self.pool, date).await?)
    }

    async fn insert(&self, booking: &NewBooking) -> Result<Booking, StoreError> {
        BookingRepo::create(&self.pool, booking)
            .await
            .map_err(translate)
    }

    async fn update_status(
        &self,
        id: DbId,
        status: BookingStatus,
    ) -> Result<Option<Booking>, StoreError> {
        BookingRepo::update_status(&self.pool, id, status)
            .await
            .map_err(translate)
    }
}
