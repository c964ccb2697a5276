//! Contact message models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use novus_core::types::{DbId, Timestamp};

/// A row from the `contacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Contact counts grouped by status.
#[derive(Debug, Clone, Default, FromRow, Serialize)]
pub struct ContactStatusCounts {
    pub total: i64,
    #[serde(rename = "new")]
    pub new_count: i64,
    pub read: i64,
    pub responded: i64,
}

/// Public contact form payload. Fields are optional so missing values
/// surface as validation errors rather than deserialization failures.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// Query parameters for the admin contact list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactListParams {
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
