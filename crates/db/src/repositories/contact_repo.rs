//! Repository for the `contacts` table.

use sqlx::PgPool;
use novus_core::contact::STATUS_NEW;
use novus_core::types::DbId;

use crate::models::contact::{Contact, ContactStatusCounts};

/// Column list for `contacts` queries.
const COLUMNS: &str = "id, name, email, subject, message, status, created_at, updated_at";

/// Provides data access for contact messages.
pub struct ContactRepo;

impl ContactRepo {
    /// Store a new message with status `new`.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        email: &str,
        subject: Option<&str>,
        message: &str,
    ) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (name, email, subject, message, status) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(name)
            .bind(email)
            .bind(subject)
            .bind(message)
            .bind(STATUS_NEW)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List messages, newest first, optionally filtered by status.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contacts \
             WHERE ($1::text IS NULL OR status = $1) \
             ORDER BY created_at DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool, status: Option<&str>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM contacts WHERE ($1::text IS NULL OR status = $1)")
            .bind(status)
            .fetch_one(pool)
            .await
    }

    /// Returns `None` if no message has this ID.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!(
            "UPDATE contacts SET status = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete several messages. Returns the number removed.
    pub async fn bulk_delete(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn status_counts(pool: &PgPool) -> Result<ContactStatusCounts, sqlx::Error> {
        sqlx::query_as::<_, ContactStatusCounts>(
            "SELECT \
                 COUNT(*) AS total, \
                 COUNT(*) FILTER (WHERE status = 'new') AS new_count, \
                 COUNT(*) FILTER (WHERE status = 'read') AS read, \
                 COUNT(*) FILTER (WHERE status = 'responded') AS responded \
             FROM contacts",
        )
        .fetch_one(pool)
        .await
    }
}
