//! Admin dashboard summary.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use novus_core::newsletter::RECENT_SUBSCRIBER_DAYS;
use novus_db::models::booking::Booking;
use novus_db::repositories::{BookingRepo, ContactRepo, NewsletterRepo};

use crate::error::AppResult;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Number of bookings shown in the "recent" list.
const RECENT_BOOKINGS: i64 = 5;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_bookings: i64,
    pub today_bookings: i64,
    pub pending_bookings: i64,
    pub confirmed_bookings: i64,
    pub completed_bookings: i64,
    pub cancelled_bookings: i64,
    pub new_contacts: i64,
    pub active_subscribers: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPayload {
    pub stats: DashboardStats,
    pub recent_bookings: Vec<Booking>,
}

/// GET /admin/stats
pub async fn get_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pool = &state.pool;

    let bookings = BookingRepo::status_counts(pool).await?;
    let today_bookings = BookingRepo::count_active_on(pool, state.admission.today()).await?;
    let contacts = ContactRepo::status_counts(pool).await?;
    let subscribers = NewsletterRepo::counts(pool, RECENT_SUBSCRIBER_DAYS).await?;
    let recent_bookings = BookingRepo::recent(pool, RECENT_BOOKINGS).await?;

    Ok(Json(SuccessResponse::new(DashboardPayload {
        stats: DashboardStats {
            total_bookings: bookings.total,
            today_bookings,
            pending_bookings: bookings.pending,
            confirmed_bookings: bookings.confirmed,
            completed_bookings: bookings.completed,
            cancelled_bookings: bookings.cancelled,
            new_contacts: contacts.new_count,
            active_subscribers: subscribers.active,
        },
        recent_bookings,
    })))
}
