//! Handlers for newsletter subscription and subscriber administration.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use novus_core::error::CoreError;
use novus_core::newsletter::{self, SubscribeAction, RECENT_SUBSCRIBER_DAYS};
use novus_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use novus_core::types::DbId;
use novus_db::models::newsletter::{
    Subscriber, SubscriberCounts, SubscriberListParams, SubscriptionRequest,
};
use novus_db::repositories::NewsletterRepo;
use novus_events::spawn_notification;

use crate::error::{AppError, AppResult};
use crate::handlers::bookings::{BulkDeletePayload, BulkDeleteRequest};
use crate::response::{Empty, SuccessResponse};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SubscriberPayload {
    pub subscriber: Subscriber,
}

#[derive(Debug, Serialize)]
pub struct SubscriberListPayload {
    pub subscribers: Vec<Subscriber>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Serialize)]
pub struct SubscriberStatsPayload {
    pub stats: SubscriberCounts,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Subscriber",
        id,
    })
}

// ---------------------------------------------------------------------------
// POST /newsletter/subscribe
// ---------------------------------------------------------------------------

/// Subscribe an address, reactivating it if it unsubscribed earlier.
///
/// Returns 201 for a new address, 200 for a reactivation, and 400 if the
/// address is already active.
pub async fn subscribe(
    State(state): State<AppState>,
    Json(input): Json<SubscriptionRequest>,
) -> AppResult<impl IntoResponse> {
    let email = newsletter::normalize_email(input.email.as_deref())?;
    let existing = NewsletterRepo::find_by_email(&state.pool, &email).await?;

    let (status, subscriber) = match newsletter::subscribe_action(existing.map(|s| s.is_active)) {
        SubscribeAction::AlreadySubscribed => {
            return Err(AppError::AlreadySubscribed);
        }
        SubscribeAction::Reactivate => {
            let subscriber = NewsletterRepo::activate(&state.pool, &email)
                .await?
                .ok_or_else(|| {
                    AppError::InternalError(format!("Subscriber {email} vanished during reactivation"))
                })?;
            (StatusCode::OK, subscriber)
        }
        // A concurrent subscribe for the same address loses on the unique
        // email constraint and gets the same 400 as the pre-check.
        SubscribeAction::Create => (
            StatusCode::CREATED,
            NewsletterRepo::create(&state.pool, &email).await?,
        ),
    };

    tracing::info!(subscriber_id = subscriber.id, status = %status, "Newsletter subscription");

    let notifier = Arc::clone(&state.notifier);
    let for_welcome = subscriber.clone();
    spawn_notification("newsletter_welcome", async move {
        notifier.send_newsletter_welcome(&for_welcome).await
    });

    Ok((
        status,
        Json(SuccessResponse::with_message(
            "Successfully subscribed to newsletter",
            SubscriberPayload { subscriber },
        )),
    ))
}

// ---------------------------------------------------------------------------
// POST /newsletter/unsubscribe
// ---------------------------------------------------------------------------

pub async fn unsubscribe(
    State(state): State<AppState>,
    Json(input): Json<SubscriptionRequest>,
) -> AppResult<impl IntoResponse> {
    let email = newsletter::normalize_email(input.email.as_deref())?;

    let subscriber = NewsletterRepo::deactivate(&state.pool, &email)
        .await?
        .ok_or_else(|| AppError::NotFound("Email not found in subscribers list".to_string()))?;

    tracing::info!(subscriber_id = subscriber.id, "Newsletter unsubscription");

    Ok(Json(SuccessResponse::with_message(
        "Successfully unsubscribed from newsletter",
        Empty {},
    )))
}

// ---------------------------------------------------------------------------
// GET /admin/newsletter
// ---------------------------------------------------------------------------

pub async fn list_subscribers(
    State(state): State<AppState>,
    Query(params): Query<SubscriberListParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);

    let subscribers = NewsletterRepo::list(&state.pool, params.active, limit, offset).await?;
    let total = NewsletterRepo::count(&state.pool, params.active).await?;

    Ok(Json(SuccessResponse::new(SubscriberListPayload {
        subscribers,
        total,
        limit,
        offset,
    })))
}

// ---------------------------------------------------------------------------
// GET /admin/newsletter/{id}
// ---------------------------------------------------------------------------

pub async fn get_subscriber(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let subscriber = NewsletterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(SuccessResponse::new(SubscriberPayload { subscriber })))
}

// ---------------------------------------------------------------------------
// DELETE /admin/newsletter/{id}
// ---------------------------------------------------------------------------

pub async fn delete_subscriber(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !NewsletterRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(subscriber_id = id, "Subscriber deleted");

    Ok(Json(SuccessResponse::with_message(
        "Subscriber deleted successfully",
        Empty {},
    )))
}

// ---------------------------------------------------------------------------
// POST /admin/newsletter/bulk-delete
// ---------------------------------------------------------------------------

pub async fn bulk_delete_subscribers(
    State(state): State<AppState>,
    Json(input): Json<BulkDeleteRequest>,
) -> AppResult<impl IntoResponse> {
    if input.ids.is_empty() {
        return Err(AppError::BadRequest("No subscriber IDs provided".to_string()));
    }

    let deleted_count = NewsletterRepo::bulk_delete(&state.pool, &input.ids).await?;

    tracing::info!(
        requested = input.ids.len(),
        deleted = deleted_count,
        "Subscribers bulk deleted",
    );

    Ok(Json(SuccessResponse::with_message(
        format!("{deleted_count} subscriber(s) deleted successfully"),
        BulkDeletePayload { deleted_count },
    )))
}

// ---------------------------------------------------------------------------
// GET /admin/newsletter/stats
// ---------------------------------------------------------------------------

/// Total, active, and subscribed within the last 30 days.
pub async fn subscriber_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = NewsletterRepo::counts(&state.pool, RECENT_SUBSCRIBER_DAYS).await?;
    Ok(Json(SuccessResponse::new(SubscriberStatsPayload { stats })))
}
