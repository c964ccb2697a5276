//! Bookable time-slot generation.
//!
//! Derives the ordered set of candidate slots for one working day from the
//! persisted schedule settings. Pure and deterministic: the same settings
//! always produce the same slots.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::validation::parse_time_of_day;

/// Meeting length used when the settings carry no duration.
pub const DEFAULT_MEETING_DURATION: i32 = 30;

/// Upper bound accepted when an administrator edits the meeting duration.
pub const MAX_MEETING_DURATION: i32 = 480;

/// The only end bound allowed past `23:59`.
pub const CLOSING_AT_MIDNIGHT: &str = "24:00";

/// Working-hours configuration consumed by [`generate_slots`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSettings {
    /// Opening time, `HH:MM`. Only the hour is significant.
    pub working_hours_start: String,
    /// Closing time, `HH:MM`. Only the hour is significant.
    pub working_hours_end: String,
    /// Meeting length in minutes; `None` falls back to
    /// [`DEFAULT_MEETING_DURATION`].
    pub meeting_duration: Option<i32>,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            working_hours_start: "09:00".to_string(),
            working_hours_end: "17:00".to_string(),
            meeting_duration: Some(DEFAULT_MEETING_DURATION),
        }
    }
}

/// Enumerate the slots of a working day in increasing time order.
///
/// For every hour in `[start, end)` a slot starts at minute 0 and then every
/// `duration` minutes while still inside the hour. A slot is kept only if it
/// finishes at or before the closing hour, so durations that do not divide
/// 60 silently lose their trailing partial slots.
///
/// A reversed or empty window yields no slots. A non-positive duration or an
/// unreadable bound is reported as [`CoreError::InvalidConfiguration`].
pub fn generate_slots(settings: &ScheduleSettings) -> Result<Vec<String>, CoreError> {
    let start_hour = bound_hour(&settings.working_hours_start, "working_hours_start")?;
    let end_hour = bound_hour(&settings.working_hours_end, "working_hours_end")?;
    let duration = effective_duration(settings.meeting_duration)?;

    let closing = end_hour * 60;
    let step = duration as usize;
    let mut slots = Vec::new();

    for hour in start_hour..end_hour {
        for minute in (0..60u32).step_by(step) {
            if hour * 60 + minute + duration <= closing {
                slots.push(format!("{hour:02}:{minute:02}"));
            }
        }
    }

    Ok(slots)
}

/// Validate settings submitted by an administrator before they are stored.
///
/// Stricter than [`generate_slots`]: both bounds must be valid `HH:MM`
/// times (the end may also be `24:00`), the window must not be empty and
/// the duration must be within `1..=MAX_MEETING_DURATION`.
pub fn validate_settings(settings: &ScheduleSettings) -> Result<(), CoreError> {
    let (start_hour, _) = parse_time_of_day(&settings.working_hours_start)?;
    let end_hour = if settings.working_hours_end == CLOSING_AT_MIDNIGHT {
        24
    } else {
        parse_time_of_day(&settings.working_hours_end)?.0
    };

    if start_hour >= end_hour {
        return Err(CoreError::Validation(format!(
            "working_hours_start ({}) must be earlier than working_hours_end ({})",
            settings.working_hours_start, settings.working_hours_end
        )));
    }

    if let Some(duration) = settings.meeting_duration {
        if !(1..=MAX_MEETING_DURATION).contains(&duration) {
            return Err(CoreError::Validation(format!(
                "meeting_duration must be between 1 and {MAX_MEETING_DURATION} minutes, got {duration}"
            )));
        }
    }

    Ok(())
}

fn effective_duration(duration: Option<i32>) -> Result<u32, CoreError> {
    match duration {
        None => Ok(DEFAULT_MEETING_DURATION as u32),
        Some(d) if d > 0 => Ok(d as u32),
        Some(d) => Err(CoreError::InvalidConfiguration(format!(
            "meeting_duration must be positive, got {d}"
        ))),
    }
}

/// Hour component of a working-hours bound. `24:00` is accepted as closing
/// time.
fn bound_hour(value: &str, field: &str) -> Result<u32, CoreError> {
    value
        .split(':')
        .next()
        .and_then(|h| h.trim().parse::<u32>().ok())
        .filter(|h| *h <= 24)
        .ok_or_else(|| {
            CoreError::InvalidConfiguration(format!("{field} '{value}' is not a valid HH:MM time"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn settings(start: &str, end: &str, duration: Option<i32>) -> ScheduleSettings {
        ScheduleSettings {
            working_hours_start: start.to_string(),
            working_hours_end: end.to_string(),
            meeting_duration: duration,
        }
    }

    #[test]
    fn nine_to_five_half_hour() {
        let slots = generate_slots(&settings("09:00", "17:00", Some(30))).unwrap();
        assert_eq!(slots.len(), 16);
        assert_eq!(slots.first().unwrap(), "09:00");
        assert_eq!(slots.last().unwrap(), "16:30");
        assert_eq!(&slots[..3], ["09:00", "09:30", "10:00"]);
    }

    #[test]
    fn missing_duration_defaults_to_thirty() {
        let defaulted = generate_slots(&settings("09:00", "17:00", None)).unwrap();
        let explicit = generate_slots(&settings("09:00", "17:00", Some(30))).unwrap();
        assert_eq!(defaulted, explicit);
    }

    #[test]
    fn slot_crossing_closing_time_is_dropped() {
        let slots = generate_slots(&settings("09:00", "10:00", Some(45))).unwrap();
        assert_eq!(slots, ["09:00"]);
    }

    #[test]
    fn non_divisor_duration_drops_trailing_slots_per_hour() {
        let slots = generate_slots(&settings("09:00", "12:00", Some(45))).unwrap();
        // 11:45 would end at 12:30.
        assert_eq!(slots, ["09:00", "09:45", "10:00", "10:45", "11:00"]);
    }

    #[test]
    fn dividing_durations_fill_the_window() {
        for duration in [5, 10, 15, 20, 30, 60] {
            let slots = generate_slots(&settings("08:00", "18:00", Some(duration))).unwrap();
            let expected = (10 * 60 / duration) as usize;
            assert_eq!(slots.len(), expected, "duration {duration}");
            assert_eq!(slots.first().unwrap(), "08:00");

            let last_start = 18 * 60 - duration;
            let last = format!("{:02}:{:02}", last_start / 60, last_start % 60);
            assert_eq!(slots.last().unwrap(), &last, "duration {duration}");

            assert!(
                slots.windows(2).all(|w| w[0] < w[1]),
                "slots must be strictly increasing for duration {duration}"
            );
        }
    }

    #[test]
    fn durations_longer_than_an_hour_start_on_the_hour() {
        let slots = generate_slots(&settings("09:00", "12:00", Some(90))).unwrap();
        assert_eq!(slots, ["09:00", "10:00"]);
    }

    #[test]
    fn empty_or_reversed_window_yields_no_slots() {
        assert!(generate_slots(&settings("09:00", "09:00", Some(30)))
            .unwrap()
            .is_empty());
        assert!(generate_slots(&settings("17:00", "09:00", Some(30)))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn bound_minutes_are_ignored() {
        let slots = generate_slots(&settings("09:30", "10:45", Some(30))).unwrap();
        assert_eq!(slots, ["09:00", "09:30"]);
    }

    #[test]
    fn non_positive_duration_is_a_configuration_error() {
        assert_matches!(
            generate_slots(&settings("09:00", "17:00", Some(0))),
            Err(CoreError::InvalidConfiguration(_))
        );
        assert_matches!(
            generate_slots(&settings("09:00", "17:00", Some(-15))),
            Err(CoreError::InvalidConfiguration(_))
        );
    }

    #[test]
    fn unreadable_bound_is_a_configuration_error() {
        assert_matches!(
            generate_slots(&settings("nine", "17:00", Some(30))),
            Err(CoreError::InvalidConfiguration(_))
        );
        assert_matches!(
            generate_slots(&settings("09:00", "25:00", Some(30))),
            Err(CoreError::InvalidConfiguration(_))
        );
    }

    #[test]
    fn closing_at_midnight() {
        let slots = generate_slots(&settings("23:00", "24:00", Some(30))).unwrap();
        assert_eq!(slots, ["23:00", "23:30"]);
    }

    #[test]
    fn validate_settings_rules() {
        assert!(validate_settings(&settings("09:00", "17:00", Some(30))).is_ok());
        assert!(validate_settings(&settings("09:00", "17:00", None)).is_ok());
        assert_matches!(
            validate_settings(&settings("17:00", "09:00", Some(30))),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            validate_settings(&settings("09:00", "09:30", Some(30))),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            validate_settings(&settings("09:00", "17:00", Some(0))),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            validate_settings(&settings("09:00", "17:00", Some(481))),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            validate_settings(&settings("9am", "17:00", Some(30))),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn midnight_is_a_valid_closing_time() {
        let evening = settings("22:00", "24:00", Some(30));
        assert!(validate_settings(&evening).is_ok());
        assert_eq!(
            generate_slots(&evening).unwrap(),
            ["22:00", "22:30", "23:00", "23:30"]
        );

        // Only the end bound may be midnight, and only exactly 24:00.
        assert_matches!(
            validate_settings(&settings("24:00", "24:00", Some(30))),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            validate_settings(&settings("22:00", "24:30", Some(30))),
            Err(CoreError::Validation(_))
        );
    }
}
