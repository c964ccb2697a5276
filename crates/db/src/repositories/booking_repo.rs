//! Repository for the `bookings` table.
//!
//! "Active" queries exclude cancelled rows, matching the partial unique
//! index `uq_bookings_active_slot` that guards one booking per slot.

use sqlx::PgPool;
use novus_core::booking::BookingStatus;
use novus_core::types::{BookingDate, DbId};

use crate::models::booking::{Booking, BookingStatusCounts, NewBooking};

/// Column list for `bookings` queries.
const COLUMNS: &str = "\
    id, name, email, company, notes, date, time_slot, status, \
    created_at, updated_at";

/// Filters shared by the admin list and its total count.
const LIST_FILTER: &str = "\
    ($1::text IS NULL OR status = $1) \
    AND ($2::date IS NULL OR date >= $2) \
    AND ($3::date IS NULL OR date <= $3)";

/// Provides data access for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking with status `pending`.
    ///
    /// Fails with a unique violation on `uq_bookings_active_slot` if another
    /// non-cancelled booking already holds the slot.
    pub async fn create(pool: &PgPool, input: &NewBooking) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings (name, email, company, notes, date, time_slot, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.company)
            .bind(&input.notes)
            .bind(input.date)
            .bind(&input.time_slot)
            .bind(BookingStatus::Pending.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a booking by its ID, whatever its status.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the non-cancelled booking holding `(date, time_slot)`, if any.
    pub async fn find_active_by_slot(
        pool: &PgPool,
        date: BookingDate,
        time_slot: &str,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings \
             WHERE date = $1 AND time_slot = $2 AND status <> 'cancelled'"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(date)
            .bind(time_slot)
            .fetch_optional(pool)
            .await
    }

    /// All non-cancelled bookings on `date`, earliest slot first.
    pub async fn find_active_by_date(
        pool: &PgPool,
        date: BookingDate,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings \
             WHERE date = $1 AND status <> 'cancelled' \
             ORDER BY time_slot ASC"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(date)
            .fetch_all(pool)
            .await
    }

    /// List bookings matching the optional filters, newest date first.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        start_date: Option<BookingDate>,
        end_date: Option<BookingDate>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings WHERE {LIST_FILTER} \
             ORDER BY date DESC, time_slot DESC \
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(status)
            .bind(start_date)
            .bind(end_date)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count bookings matching the same filters as [`BookingRepo::list`].
    pub async fn count(
        pool: &PgPool,
        status: Option<&str>,
        start_date: Option<BookingDate>,
        end_date: Option<BookingDate>,
    ) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM bookings WHERE {LIST_FILTER}");
        sqlx::query_scalar(&query)
            .bind(status)
            .bind(start_date)
            .bind(end_date)
            .fetch_one(pool)
            .await
    }

    /// Set the status of a booking and bump `updated_at`.
    ///
    /// Returns `None` if no booking has this ID.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: BookingStatus,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET status = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a booking. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete several bookings. Returns the number removed.
    pub async fn bulk_delete(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Booking counts per status across the whole table.
    pub async fn status_counts(pool: &PgPool) -> Result<BookingStatusCounts, sqlx::Error> {
        sqlx::query_as::<_, BookingStatusCounts>(
            "SELECT \
                 COUNT(*) AS total, \
                 COUNT(*) FILTER (WHERE status = 'pending') AS pending, \
                 COUNT(*) FILTER (WHERE status = 'confirmed') AS confirmed, \
                 COUNT(*) FILTER (WHERE status = 'completed') AS completed, \
                 COUNT(*) FILTER (WHERE status = 'cancelled') AS cancelled \
             FROM bookings",
        )
        .fetch_one(pool)
        .await
    }

    /// Number of non-cancelled bookings on `date`.
    pub async fn count_active_on(pool: &PgPool, date: BookingDate) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM bookings WHERE date = $1 AND status <> 'cancelled'",
        )
        .bind(date)
        .fetch_one(pool)
        .await
    }

    /// Most recently created bookings.
    pub async fn recent(pool: &PgPool, limit: i64) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings ORDER BY created_at DESC LIMIT $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
