//! Schedule settings row and update DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use novus_core::slots::ScheduleSettings;
use novus_core::types::Timestamp;

/// The single row of the `schedule_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ScheduleSettingsRow {
    pub working_hours_start: String,
    pub working_hours_end: String,
    pub meeting_duration: i32,
    pub updated_at: Timestamp,
}

impl From<ScheduleSettingsRow> for ScheduleSettings {
    fn from(row: ScheduleSettingsRow) -> Self {
        ScheduleSettings {
            working_hours_start: row.working_hours_start,
            working_hours_end: row.working_hours_end,
            meeting_duration: Some(row.meeting_duration),
        }
    }
}

/// DTO for replacing the schedule settings.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateScheduleSettings {
    pub working_hours_start: String,
    pub working_hours_end: String,
    pub meeting_duration: Option<i32>,
}

impl UpdateScheduleSettings {
    /// View the update as the settings slot generation will see.
    pub fn as_settings(&self) -> ScheduleSettings {
        ScheduleSettings {
            working_hours_start: self.working_hours_start.clone(),
            working_hours_end: self.working_hours_end.clone(),
            meeting_duration: self.meeting_duration,
        }
    }
}
