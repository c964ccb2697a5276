//! Booking status lifecycle and availability rules.
//!
//! Bookings start as `pending` and move between the four statuses only by
//! explicit administrator action. There is no enforced ordering: any status
//! may follow any other. Every non-cancelled booking holds its
//! (date, time slot) exclusively.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::BookingDate;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Status of a booking, stored as lowercase text in `bookings.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Whether a booking in this status holds its slot.
    pub fn occupies_slot(self) -> bool {
        self != BookingStatus::Cancelled
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(
                    "Invalid status. Must be: pending, confirmed, completed, or cancelled"
                        .to_string(),
                )
            })
    }
}

/// Parse an optional status field from a request body.
pub fn parse_status(status: Option<&str>) -> Result<BookingStatus, CoreError> {
    status.unwrap_or_default().parse()
}

// ---------------------------------------------------------------------------
// Availability
// ---------------------------------------------------------------------------

/// Open slots for one day, derived from the generated slot set minus the
/// slots held by non-cancelled bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub date: BookingDate,
    pub slots: Vec<String>,
    pub total_slots: usize,
    pub available_count: usize,
    pub booked_count: usize,
}

/// Remove `booked` slots from `all_slots`, keeping generator order.
///
/// `booked_count` counts bookings, not matched slots, so bookings held at a
/// time that is no longer generated (after a settings change) still count.
pub fn compute_availability(
    date: BookingDate,
    all_slots: Vec<String>,
    booked: &[String],
) -> Availability {
    let taken: HashSet<&str> = booked.iter().map(String::as_str).collect();
    let total_slots = all_slots.len();
    let slots: Vec<String> = all_slots
        .into_iter()
        .filter(|slot| !taken.contains(slot.as_str()))
        .collect();

    Availability {
        date,
        available_count: slots.len(),
        slots,
        total_slots,
        booked_count: booked.len(),
    }
}

/// Reject a requested time that is not one of the generated slots.
pub fn ensure_slot_offered(time_slot: &str, offered: &[String]) -> Result<(), CoreError> {
    if offered.iter().any(|slot| slot == time_slot) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "'{time_slot}' is not a bookable time slot"
        )))
    }
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// Percentage of completed bookings over all bookings, rounded to two
/// decimals. Zero when there are no bookings.
pub fn completion_rate(completed: i64, total: i64) -> f64 {
    crate::stats::percentage(completed, total)
}
