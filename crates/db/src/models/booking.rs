//! Booking models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use novus_core::types::{BookingDate, DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `bookings` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub notes: Option<String>,
    pub date: BookingDate,
    pub time_slot: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Booking counts grouped by status.
#[derive(Debug, Clone, Default, FromRow, Serialize)]
pub struct BookingStatusCounts {
    pub total: i64,
    pub pending: i64,
    pub confirmed: i64,
    pub completed: i64,
    pub cancelled: i64,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// A validated booking ready to be inserted with status `pending`.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub notes: Option<String>,
    pub date: BookingDate,
    pub time_slot: String,
}

/// Query parameters for the admin booking list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingListParams {
    pub status: Option<String>,
    pub start_date: Option<BookingDate>,
    pub end_date: Option<BookingDate>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
