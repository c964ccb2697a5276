//! Repository for the `newsletter_subscribers` table.

use sqlx::PgPool;
use novus_core::types::DbId;

use crate::models::newsletter::{Subscriber, SubscriberCounts};
use crate::store::UNIQUE_VIOLATION;

/// Column list for `newsletter_subscribers` queries.
const COLUMNS: &str = "id, email, is_active, subscribed_at, unsubscribed_at";

/// Unique constraint on the (lowercased) subscriber email.
pub const EMAIL_CONSTRAINT: &str = "uq_newsletter_subscribers_email";

/// Whether `err` is an insert racing an existing row for the same address.
pub fn is_duplicate_email(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
                && db_err.constraint() == Some(EMAIL_CONSTRAINT)
        }
        _ => false,
    }
}

/// Provides data access for newsletter subscribers.
pub struct NewsletterRepo;

impl NewsletterRepo {
    /// Insert a new active subscriber.
    ///
    /// Fails with a unique violation on `uq_newsletter_subscribers_email`
    /// if the address is already present.
    pub async fn create(pool: &PgPool, email: &str) -> Result<Subscriber, sqlx::Error> {
        let query = format!(
            "INSERT INTO newsletter_subscribers (email) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subscriber>(&query)
            .bind(email)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<Subscriber>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM newsletter_subscribers WHERE email = $1");
        sqlx::query_as::<_, Subscriber>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Subscriber>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM newsletter_subscribers WHERE id = $1");
        sqlx::query_as::<_, Subscriber>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Turn a subscription back on and restart its `subscribed_at` clock.
    pub async fn activate(pool: &PgPool, email: &str) -> Result<Option<Subscriber>, sqlx::Error> {
        let query = format!(
            "UPDATE newsletter_subscribers \
             SET is_active = TRUE, subscribed_at = NOW(), unsubscribed_at = NULL \
             WHERE email = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subscriber>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Turn a subscription off. Returns `None` if the address is unknown.
    pub async fn deactivate(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<Subscriber>, sqlx::Error> {
        let query = format!(
            "UPDATE newsletter_subscribers \
             SET is_active = FALSE, unsubscribed_at = NOW() \
             WHERE email = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subscriber>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List subscribers, newest first, optionally filtered by activity.
    pub async fn list(
        pool: &PgPool,
        active: Option<bool>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Subscriber>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM newsletter_subscribers \
             WHERE ($1::boolean IS NULL OR is_active = $1) \
             ORDER BY subscribed_at DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Subscriber>(&query)
            .bind(active)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool, active: Option<bool>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM newsletter_subscribers \
             WHERE ($1::boolean IS NULL OR is_active = $1)",
        )
        .bind(active)
        .fetch_one(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM newsletter_subscribers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete several subscribers, active or not.
    pub async fn bulk_delete(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM newsletter_subscribers WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Total, active, and subscribed within the last `recent_days` days.
    pub async fn counts(pool: &PgPool, recent_days: i64) -> Result<SubscriberCounts, sqlx::Error> {
        sqlx::query_as::<_, SubscriberCounts>(
            "SELECT \
                 COUNT(*) AS total, \
                 COUNT(*) FILTER (WHERE is_active) AS active, \
                 COUNT(*) FILTER (WHERE subscribed_at >= NOW() - make_interval(days => $1::int)) AS recent \
             FROM newsletter_subscribers",
        )
        .bind(recent_days)
        .fetch_one(pool)
        .await
    }
}
