//! Handlers for the schedule settings that drive slot generation.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use novus_core::slots::{self, ScheduleSettings, DEFAULT_MEETING_DURATION};
use novus_core::types::Timestamp;
use novus_db::models::schedule_setting::{ScheduleSettingsRow, UpdateScheduleSettings};
use novus_db::repositories::ScheduleSettingsRepo;

use crate::error::AppResult;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Settings as returned to the admin UI. `updated_at` is absent when the
/// stored row is missing and defaults are in effect.
#[derive(Debug, Serialize)]
pub struct SettingsView {
    pub working_hours_start: String,
    pub working_hours_end: String,
    pub meeting_duration: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl From<ScheduleSettingsRow> for SettingsView {
    fn from(row: ScheduleSettingsRow) -> Self {
        Self {
            working_hours_start: row.working_hours_start,
            working_hours_end: row.working_hours_end,
            meeting_duration: row.meeting_duration,
            updated_at: Some(row.updated_at),
        }
    }
}

impl From<ScheduleSettings> for SettingsView {
    fn from(settings: ScheduleSettings) -> Self {
        Self {
            working_hours_start: settings.working_hours_start,
            working_hours_end: settings.working_hours_end,
            meeting_duration: settings.meeting_duration.unwrap_or(DEFAULT_MEETING_DURATION),
            updated_at: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SettingsPayload {
    pub settings: SettingsView,
}

/// GET /admin/settings
pub async fn get_settings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = match ScheduleSettingsRepo::get(&state.pool).await? {
        Some(row) => SettingsView::from(row),
        None => SettingsView::from(ScheduleSettings::default()),
    };

    Ok(Json(SuccessResponse::new(SettingsPayload { settings })))
}

/// PUT /admin/settings
///
/// Takes effect on the next availability or booking request.
pub async fn update_settings(
    State(state): State<AppState>,
    Json(input): Json<UpdateScheduleSettings>,
) -> AppResult<impl IntoResponse> {
    slots::validate_settings(&input.as_settings())?;

    let row = ScheduleSettingsRepo::upsert(&state.pool, &input).await?;

    tracing::info!(
        working_hours_start = %row.working_hours_start,
        working_hours_end = %row.working_hours_end,
        meeting_duration = row.meeting_duration,
        "Schedule settings updated",
    );

    Ok(Json(SuccessResponse::with_message(
        "Settings updated successfully",
        SettingsPayload {
            settings: SettingsView::from(row),
        },
    )))
}
