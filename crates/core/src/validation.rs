//! Shared input validation helpers.
//!
//! Used by bookings, contact messages and newsletter subscriptions so that
//! every public form rejects malformed input with the same wording.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::CoreError;
use crate::types::BookingDate;

/// Permissive `local@domain.tld` shape. No whitespace, exactly one `@`
/// separating the local part from a dotted domain.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Strict `YYYY-MM-DD` shape, checked before calendar parsing.
const DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";

/// Strict `HH:MM` shape.
const TIME_PATTERN: &str = r"^\d{2}:\d{2}$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(DATE_PATTERN).expect("valid regex"));
static TIME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(TIME_PATTERN).expect("valid regex"));

/// Return the trimmed value of a required text field.
///
/// Missing and blank values are both rejected.
pub fn require_field<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, CoreError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CoreError::Validation(format!("{name} is required"))),
    }
}

/// Validate that an email address has the `local@domain.tld` shape.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(CoreError::Validation("Invalid email format".to_string()))
    }
}

/// Parse a `YYYY-MM-DD` string into a calendar date.
pub fn parse_date(date: &str) -> Result<BookingDate, CoreError> {
    if !DATE_RE.is_match(date) {
        return Err(CoreError::Validation(
            "Invalid date format. Use YYYY-MM-DD".to_string(),
        ));
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| CoreError::Validation(format!("'{date}' is not a valid calendar date")))
}

/// Parse a booking date and reject days strictly before `today`.
///
/// The comparison is day-granular: `today` itself is always bookable.
pub fn parse_bookable_date(date: &str, today: BookingDate) -> Result<BookingDate, CoreError> {
    let parsed = parse_date(date)?;
    if parsed < today {
        return Err(CoreError::Validation(
            "Cannot book slots in the past".to_string(),
        ));
    }
    Ok(parsed)
}

/// Split an `HH:MM` string into hour and minute, checking ranges.
pub fn parse_time_of_day(value: &str) -> Result<(u32, u32), CoreError> {
    let invalid = || CoreError::Validation(format!("Invalid time '{value}'. Use HH:MM"));

    if !TIME_RE.is_match(value) {
        return Err(invalid());
    }
    let (h, m) = value.split_once(':').ok_or_else(invalid)?;
    let hour: u32 = h.parse().map_err(|_| invalid())?;
    let minute: u32 = m.parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }
    Ok((hour, minute))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn day(s: &str) -> BookingDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn require_field_rejects_missing_and_blank() {
        assert!(require_field(None, "Name").is_err());
        assert!(require_field(Some("   "), "Name").is_err());
        assert_eq!(require_field(Some("  Ada "), "Name").unwrap(), "Ada");
    }

    #[test]
    fn email_shapes() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("a.b+c@sub.example.co").is_ok());
        assert!(validate_email("ada@example").is_err());
        assert!(validate_email("ada example@x.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ada@@example.com").is_err());
    }

    #[test]
    fn date_shape_is_strict() {
        assert!(parse_date("2030-01-05").is_ok());
        assert_matches!(parse_date("2030-1-5"), Err(CoreError::Validation(_)));
        assert_matches!(parse_date("05/01/2030"), Err(CoreError::Validation(_)));
        assert_matches!(parse_date("2030-02-30"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn today_is_bookable_yesterday_is_not() {
        let today = day("2030-06-15");
        assert_eq!(parse_bookable_date("2030-06-15", today).unwrap(), today);
        assert!(parse_bookable_date("2030-06-16", today).is_ok());
        assert_matches!(
            parse_bookable_date("2030-06-14", today),
            Err(CoreError::Validation(msg)) if msg.contains("past")
        );
    }

    #[test]
    fn time_of_day_ranges() {
        assert_eq!(parse_time_of_day("09:30").unwrap(), (9, 30));
        assert_eq!(parse_time_of_day("00:00").unwrap(), (0, 0));
        assert!(parse_time_of_day("24:00").is_err());
        assert!(parse_time_of_day("12:60").is_err());
        assert!(parse_time_of_day("9:30").is_err());
        assert!(parse_time_of_day("09:30:00").is_err());
    }
}
