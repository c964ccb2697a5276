//! Newsletter subscriber models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use novus_core::types::{DbId, Timestamp};

/// A row from the `newsletter_subscribers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Subscriber {
    pub id: DbId,
    pub email: String,
    pub is_active: bool,
    pub subscribed_at: Timestamp,
    pub unsubscribed_at: Option<Timestamp>,
}

/// Aggregate subscriber counts.
#[derive(Debug, Clone, Default, FromRow, Serialize)]
pub struct SubscriberCounts {
    pub total: i64,
    pub active: i64,
    pub recent: i64,
}

/// Subscribe/unsubscribe payload.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionRequest {
    pub email: Option<String>,
}

/// Query parameters for the admin subscriber list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscriberListParams {
    pub active: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
