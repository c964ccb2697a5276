//! Booking admission: slot availability, booking creation and status changes.
//!
//! Admission never locks. The optimistic pre-check gives a fast, specific
//! error; the storage layer's unique index over non-cancelled
//! `(date, time_slot)` pairs decides races, and its violation is reported as
//! the same [`CoreError::SlotConflict`].

use std::sync::Arc;

use novus_core::booking::{self, Availability};
use novus_core::error::CoreError;
use novus_core::slots::generate_slots;
use novus_core::types::{BookingDate, DbId};
use novus_core::validation::{
    parse_bookable_date, parse_time_of_day, require_field, validate_email,
};
use novus_db::models::booking::{Booking, NewBooking};
use novus_db::store::BookingStore;
use novus_events::{spawn_notification, Notifier};
use serde::Deserialize;

use crate::error::{AppResult, SLOT_TAKEN_MESSAGE};

/// Public booking form payload.
///
/// Every field is optional so that missing values surface as validation
/// errors with a readable message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "timeSlot")]
    pub time_slot: Option<String>,
}

/// Current calendar day in the server's local time zone.
pub fn local_today() -> BookingDate {
    chrono::Local::now().date_naive()
}

/// Admits new bookings and applies status changes.
pub struct BookingAdmission {
    store: Arc<dyn BookingStore>,
    notifier: Arc<dyn Notifier>,
    clock: fn() -> BookingDate,
}

impl BookingAdmission {
    pub fn new(store: Arc<dyn BookingStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            clock: local_today,
        }
    }

    /// Replace the clock used to decide which dates are in the past.
    pub fn with_clock(mut self, clock: fn() -> BookingDate) -> Self {
        self.clock = clock;
        self
    }

    /// Today's date according to the admission clock.
    pub fn today(&self) -> BookingDate {
        (self.clock)()
    }

    /// Open slots on `date`.
    ///
    /// Settings are read from the store on every call.
    pub async fn list_available(&self, date: Option<&str>) -> AppResult<Availability> {
        let date = require_field(date, "Date")?;
        let date = parse_bookable_date(date, self.today())?;

        let settings = self.store.schedule_settings().await?;
        let all_slots = generate_slots(&settings)?;
        let booked: Vec<String> = self
            .store
            .find_active_by_date(date)
            .await?
            .into_iter()
            .map(|b| b.time_slot)
            .collect();

        let availability = booking::compute_availability(date, all_slots, &booked);

        tracing::debug!(
            %date,
            total = availability.total_slots,
            available = availability.available_count,
            "Computed slot availability",
        );

        Ok(availability)
    }

    /// Validate and persist a new `pending` booking, then queue the
    /// confirmation email.
    pub async fn create_booking(&self, request: &BookingRequest) -> AppResult<Booking> {
        let new_booking = self.validate_request(request)?;

        let settings = self.store.schedule_settings().await?;
        let offered = generate_slots(&settings)?;
        booking::ensure_slot_offered(&new_booking.time_slot, &offered)?;

        if let Some(existing) = self
            .store
            .find_active_by_slot(new_booking.date, &new_booking.time_slot)
            .await?
        {
            tracing::info!(
                existing_booking_id = existing.id,
                date = %new_booking.date,
                time_slot = %new_booking.time_slot,
                "Rejected booking for taken slot",
            );
            return Err(CoreError::SlotConflict(SLOT_TAKEN_MESSAGE.to_string()).into());
        }

        // A concurrent request may still win between the check and the
        // insert; the store reports that as SlotTaken.
        let created = self.store.insert(&new_booking).await?;

        tracing::info!(
            booking_id = created.id,
            date = %created.date,
            time_slot = %created.time_slot,
            "Booking created",
        );

        let notifier = Arc::clone(&self.notifier);
        let booking = created.clone();
        spawn_notification("booking_confirmation", async move {
            notifier.send_booking_confirmation(&booking).await
        });

        Ok(created)
    }

    /// Move a booking to `status`. Any status may follow any other.
    pub async fn update_status(&self, id: DbId, status: Option<&str>) -> AppResult<Booking> {
        let status = booking::parse_status(status)?;

        let updated = self
            .store
            .update_status(id, status)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Booking",
                id,
            })?;

        tracing::info!(booking_id = id, %status, "Booking status updated");

        let notifier = Arc::clone(&self.notifier);
        let booking = updated.clone();
        spawn_notification("booking_status_update", async move {
            notifier.send_booking_status_update(&booking, status).await
        });

        Ok(updated)
    }

    /// Structural checks that need no storage access.
    fn validate_request(&self, request: &BookingRequest) -> Result<NewBooking, CoreError> {
        let (Ok(name), Ok(email), Ok(date), Ok(time_slot)) = (
            require_field(request.name.as_deref(), "Name"),
            require_field(request.email.as_deref(), "Email"),
            require_field(request.date.as_deref(), "Date"),
            require_field(request.time_slot.as_deref(), "Time slot"),
        ) else {
            return Err(CoreError::Validation(
                "Name, email, date, and time slot are required".to_string(),
            ));
        };

        validate_email(email)?;
        let date = parse_bookable_date(date, self.today())?;
        parse_time_of_day(time_slot)?;

        Ok(NewBooking {
            name: name.to_string(),
            email: email.to_string(),
            company: optional_text(request.company.as_deref()),
            notes: optional_text(request.notes.as_deref()),
            date,
            time_slot: time_slot.to_string(),
        })
    }
}

/// Trim an optional free-text field, treating blank as absent.
fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
