/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar day of a booking (`YYYY-MM-DD`).
pub type BookingDate = chrono::NaiveDate;
