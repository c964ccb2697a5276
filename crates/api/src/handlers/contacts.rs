//! Handlers for the public contact form and contact message triage.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use novus_core::contact;
use novus_core::error::CoreError;
use novus_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use novus_core::types::DbId;
use novus_db::models::contact::{Contact, ContactListParams, ContactStatusCounts, CreateContact};
use novus_db::repositories::ContactRepo;
use novus_events::spawn_notification;

use crate::error::{AppError, AppResult};
use crate::handlers::bookings::{BulkDeletePayload, BulkDeleteRequest};
use crate::response::{Empty, SuccessResponse};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactPayload {
    pub contact: Contact,
}

#[derive(Debug, Serialize)]
pub struct ContactListPayload {
    pub contacts: Vec<Contact>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactStats {
    #[serde(flatten)]
    pub counts: ContactStatusCounts,
    pub response_rate: f64,
}

#[derive(Debug, Serialize)]
pub struct ContactStatsPayload {
    pub stats: ContactStats,
}

#[derive(Debug, Deserialize)]
pub struct UpdateContactStatus {
    pub status: Option<String>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Contact",
        id,
    })
}

// ---------------------------------------------------------------------------
// POST /contact
// ---------------------------------------------------------------------------

/// Store a contact form submission and notify the administrator inbox.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(input): Json<CreateContact>,
) -> AppResult<impl IntoResponse> {
    contact::validate_submission(
        input.name.as_deref(),
        input.email.as_deref(),
        input.message.as_deref(),
    )?;

    let name = input.name.as_deref().unwrap_or_default().trim();
    let email = input.email.as_deref().unwrap_or_default().trim();
    let message = input.message.as_deref().unwrap_or_default().trim();
    let subject = input
        .subject
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let created = ContactRepo::create(&state.pool, name, email, subject, message).await?;

    tracing::info!(contact_id = created.id, "Contact message received");

    let notifier = Arc::clone(&state.notifier);
    let for_notice = created.clone();
    spawn_notification("contact_notification", async move {
        notifier.send_contact_notification(&for_notice).await
    });

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::with_message(
            "Thank you for your message! We will get back to you soon.",
            ContactPayload { contact: created },
        )),
    ))
}

// ---------------------------------------------------------------------------
// GET /admin/contacts
// ---------------------------------------------------------------------------

pub async fn list_contacts(
    State(state): State<AppState>,
    Query(params): Query<ContactListParams>,
) -> AppResult<impl IntoResponse> {
    let status = params.status.as_deref().filter(|s| !s.is_empty());
    if let Some(s) = status {
        contact::validate_status(s)?;
    }

    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);

    let contacts = ContactRepo::list(&state.pool, status, limit, offset).await?;
    let total = ContactRepo::count(&state.pool, status).await?;

    Ok(Json(SuccessResponse::new(ContactListPayload {
        contacts,
        total,
        limit,
        offset,
    })))
}

// ---------------------------------------------------------------------------
// GET /admin/contacts/{id}
// ---------------------------------------------------------------------------

pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let contact = ContactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(SuccessResponse::new(ContactPayload { contact })))
}

// ---------------------------------------------------------------------------
// PATCH /admin/contacts/{id}
// ---------------------------------------------------------------------------

pub async fn update_contact_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContactStatus>,
) -> AppResult<impl IntoResponse> {
    let status = input.status.as_deref().unwrap_or_default();
    contact::validate_status(status)?;

    let contact = ContactRepo::update_status(&state.pool, id, status)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(contact_id = id, status, "Contact status updated");

    Ok(Json(SuccessResponse::with_message(
        "Contact status updated successfully",
        ContactPayload { contact },
    )))
}

// ---------------------------------------------------------------------------
// DELETE /admin/contacts/{id}
// ---------------------------------------------------------------------------

pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ContactRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(contact_id = id, "Contact deleted");

    Ok(Json(SuccessResponse::with_message(
        "Contact deleted successfully",
        Empty {},
    )))
}

// ---------------------------------------------------------------------------
// POST /admin/contacts/bulk-delete
// ---------------------------------------------------------------------------

pub async fn bulk_delete_contacts(
    State(state): State<AppState>,
    Json(input): Json<BulkDeleteRequest>,
) -> AppResult<impl IntoResponse> {
    if input.ids.is_empty() {
        return Err(AppError::BadRequest("No contact IDs provided".to_string()));
    }

    let deleted_count = ContactRepo::bulk_delete(&state.pool, &input.ids).await?;

    tracing::info!(
        requested = input.ids.len(),
        deleted = deleted_count,
        "Contacts bulk deleted",
    );

    Ok(Json(SuccessResponse::with_message(
        format!("{deleted_count} contact(s) deleted successfully"),
        BulkDeletePayload { deleted_count },
    )))
}

// ---------------------------------------------------------------------------
// GET /admin/contacts/stats
// ---------------------------------------------------------------------------

/// Per-status counts and the share of messages that were answered.
pub async fn contact_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let counts = ContactRepo::status_counts(&state.pool).await?;
    let response_rate = contact::response_rate(counts.responded, counts.total);

    Ok(Json(SuccessResponse::new(ContactStatsPayload {
        stats: ContactStats {
            counts,
            response_rate,
        },
    })))
}
