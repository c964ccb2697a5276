//! Repository for the single-row `schedule_settings` table.

use sqlx::PgPool;

use crate::models::schedule_setting::{ScheduleSettingsRow, UpdateScheduleSettings};

/// Column list for `schedule_settings` queries.
const COLUMNS: &str = "working_hours_start, working_hours_end, meeting_duration, updated_at";

/// Provides data access for the schedule settings.
pub struct ScheduleSettingsRepo;

impl ScheduleSettingsRepo {
    /// Read the current settings.
    ///
    /// Returns `None` if the seeded row has been removed.
    pub async fn get(pool: &PgPool) -> Result<Option<ScheduleSettingsRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM schedule_settings WHERE id = 1");
        sqlx::query_as::<_, ScheduleSettingsRow>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Replace the settings, recreating the row if it is missing.
    ///
    /// A missing `meeting_duration` keeps the stored value.
    pub async fn upsert(
        pool: &PgPool,
        dto: &UpdateScheduleSettings,
    ) -> Result<ScheduleSettingsRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO schedule_settings \
                 (id, working_hours_start, working_hours_end, meeting_duration) \
             VALUES (1, $1, $2, COALESCE($3, 30)) \
             ON CONFLICT (id) DO UPDATE SET \
                 working_hours_start = EXCLUDED.working_hours_start, \
                 working_hours_end = EXCLUDED.working_hours_end, \
                 meeting_duration = COALESCE($3, schedule_settings.meeting_duration), \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ScheduleSettingsRow>(&query)
            .bind(&dto.working_hours_start)
            .bind(&dto.working_hours_end)
            .bind(dto.meeting_duration)
            .fetch_one(pool)
            .await
    }
}
