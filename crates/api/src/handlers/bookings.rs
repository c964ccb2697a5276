//! Handlers for the public booking form and booking administration.
//!
//! Availability, creation and status changes go through
//! [`BookingAdmission`](crate::admission::BookingAdmission); the remaining
//! admin operations use [`BookingRepo`] directly.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use novus_core::booking::{self, BookingStatus};
use novus_core::error::CoreError;
use novus_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use novus_core::types::{BookingDate, DbId, Timestamp};
use novus_db::models::booking::{Booking, BookingListParams};
use novus_db::repositories::BookingRepo;

use crate::admission::BookingRequest;
use crate::error::{AppError, AppResult};
use crate::response::{Empty, SuccessResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: Option<String>,
}

/// Fields echoed back to the requester after a booking is created.
#[derive(Debug, Serialize)]
pub struct BookingSummary {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub date: BookingDate,
    pub time_slot: String,
    pub status: String,
    pub created_at: Timestamp,
}

impl From<Booking> for BookingSummary {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            name: b.name,
            email: b.email,
            company: b.company,
            date: b.date,
            time_slot: b.time_slot,
            status: b.status,
            created_at: b.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookingPayload<T: Serialize> {
    pub booking: T,
}

#[derive(Debug, Serialize)]
pub struct BookingListPayload {
    pub bookings: Vec<Booking>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatus {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BulkDeleteRequest {
    #[serde(default)]
    pub ids: Vec<DbId>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeletePayload {
    pub deleted_count: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStats {
    pub total: i64,
    pub today: i64,
    pub pending: i64,
    pub confirmed: i64,
    pub completed: i64,
    pub cancelled: i64,
    pub completion_rate: f64,
}

#[derive(Debug, Serialize)]
pub struct BookingStatsPayload {
    pub stats: BookingStats,
}

// ---------------------------------------------------------------------------
// GET /bookings/availability
// ---------------------------------------------------------------------------

/// Open slots for the requested date.
pub async fn get_availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<impl IntoResponse> {
    let availability = state.admission.list_available(query.date.as_deref()).await?;
    Ok(Json(SuccessResponse::new(availability)))
}

// ---------------------------------------------------------------------------
// POST /bookings
// ---------------------------------------------------------------------------

/// Submit the public booking form.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(input): Json<BookingRequest>,
) -> AppResult<impl IntoResponse> {
    let created = state.admission.create_booking(&input).await?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::with_message(
            "Booking created successfully! Check your email for confirmation.",
            BookingPayload {
                booking: BookingSummary::from(created),
            },
        )),
    ))
}

// ---------------------------------------------------------------------------
// GET /admin/bookings
// ---------------------------------------------------------------------------

/// List bookings with optional status and date-range filters.
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(params): Query<BookingListParams>,
) -> AppResult<impl IntoResponse> {
    let status = match params.status.as_deref().filter(|s| !s.is_empty()) {
        Some(s) => Some(s.parse::<BookingStatus>()?),
        None => None,
    };
    let status = status.map(BookingStatus::as_str);

    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);

    let bookings = BookingRepo::list(
        &state.pool,
        status,
        params.start_date,
        params.end_date,
        limit,
        offset,
    )
    .await?;
    let total = BookingRepo::count(&state.pool, status, params.start_date, params.end_date).await?;

    Ok(Json(SuccessResponse::new(BookingListPayload {
        bookings,
        total,
        limit,
        offset,
    })))
}

// ---------------------------------------------------------------------------
// GET /admin/bookings/{id}
// ---------------------------------------------------------------------------

pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let booking = BookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;

    Ok(Json(SuccessResponse::new(BookingPayload { booking })))
}

// ---------------------------------------------------------------------------
// PATCH /admin/bookings/{id}
// ---------------------------------------------------------------------------

/// Change a booking's status and notify the requester.
pub async fn update_booking_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBookingStatus>,
) -> AppResult<impl IntoResponse> {
    let booking = state
        .admission
        .update_status(id, input.status.as_deref())
        .await?;

    Ok(Json(SuccessResponse::with_message(
        "Booking status updated successfully",
        BookingPayload { booking },
    )))
}

// ---------------------------------------------------------------------------
// DELETE /admin/bookings/{id}
// ---------------------------------------------------------------------------

/// Permanently remove a booking, freeing its slot.
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !BookingRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }));
    }

    tracing::info!(booking_id = id, "Booking deleted");

    Ok(Json(SuccessResponse::with_message(
        "Booking deleted successfully",
        Empty {},
    )))
}

// ---------------------------------------------------------------------------
// POST /admin/bookings/bulk-delete
// ---------------------------------------------------------------------------

pub async fn bulk_delete_bookings(
    State(state): State<AppState>,
    Json(input): Json<BulkDeleteRequest>,
) -> AppResult<impl IntoResponse> {
    if input.ids.is_empty() {
        return Err(AppError::BadRequest("No booking IDs provided".to_string()));
    }

    let deleted_count = BookingRepo::bulk_delete(&state.pool, &input.ids).await?;

    tracing::info!(
        requested = input.ids.len(),
        deleted = deleted_count,
        "Bookings bulk deleted",
    );

    Ok(Json(SuccessResponse::with_message(
        format!("{deleted_count} booking(s) deleted successfully"),
        BulkDeletePayload { deleted_count },
    )))
}

// ---------------------------------------------------------------------------
// GET /admin/bookings/stats
// ---------------------------------------------------------------------------

/// Per-status counts, today's load, and the completion rate.
pub async fn booking_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let counts = BookingRepo::status_counts(&state.pool).await?;
    let today = BookingRepo::count_active_on(&state.pool, state.admission.today()).await?;

    Ok(Json(SuccessResponse::new(BookingStatsPayload {
        stats: BookingStats {
            total: counts.total,
            today,
            pending: counts.pending,
            confirmed: counts.confirmed,
            completed: counts.completed,
            cancelled: counts.cancelled,
            completion_rate: booking::completion_rate(counts.completed, counts.total),
        },
    })))
}
