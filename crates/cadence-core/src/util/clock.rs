//! Wall-clock `HH:MM` helpers.
//!
//! ## Summary
//! Pattern start and end times travel as short `HH:MM` strings. These helpers
//! convert between that form and `chrono::NaiveTime` without any timezone
//! handling: values are naive local times.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::{CoreError, CoreResult};

/// Parse an `HH:MM` wall-clock time.
///
/// The hour may be a single digit (`9:05`). A trailing `:SS` component is
/// accepted and ignored, since occurrences are scheduled to the minute.
///
/// ## Errors
/// Returns `CoreError::InvalidInput` if the value is not a valid time of day.
pub fn parse_hh_mm(value: &str) -> CoreResult<NaiveTime> {
    let invalid = || CoreError::InvalidInput(format!("invalid HH:MM time: {value:?}"));

    let mut parts = value.trim().split(':');
    let hour = parts.next().ok_or_else(invalid)?;
    let minute = parts.next().ok_or_else(invalid)?;
    if let Some(second) = parts.next()
        && second.parse::<u32>().is_err()
    {
        return Err(invalid());
    }
    if parts.next().is_some() || hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return Err(invalid());
    }

    let hour: u32 = hour.parse().map_err(|_err| invalid())?;
    let minute: u32 = minute.parse().map_err(|_err| invalid())?;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// Format the hour and minute of a time as `HH:MM`.
#[must_use]
pub fn format_hh_mm(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Place a wall-clock time onto a calendar date, dropping seconds.
#[must_use]
pub fn at_hour_minute(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    let truncated = NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time);
    date.and_time(truncated)
}
