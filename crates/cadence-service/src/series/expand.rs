//! Weekly occurrence expansion.
//!
//! ## Summary
//! Turns a base session plus a repeat configuration into the ordered list of
//! additional sessions to create. The expansion is pure: it reads only its
//! arguments and never consults already stored sessions.

use cadence_core::constants::DAYS_PER_WEEK;
use cadence_core::types::DayOfWeek;
use cadence_core::util::clock::{at_hour_minute, parse_hh_mm};
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::Serialize;

use super::model::{BaseSession, SeriesId, SessionRequest};
use super::pattern::{Pattern, RepeatConfig};
use crate::error::{ServiceError, ServiceResult};

/// Values derived once from the base session and shared by every occurrence.
struct BaseFrame<'a> {
    date: NaiveDate,
    weekday: DayOfWeek,
    start_time: NaiveTime,
    duration_minutes: i64,
    series_id: &'a SeriesId,
}

/// ## Summary
/// Expands `base` into the additional occurrences described by `config`,
/// tagging them with a freshly generated series identifier.
///
/// ## Errors
/// Returns `ServiceError::InvalidBaseSession`, `ServiceError::InvalidRepeatConfig`
/// or `ServiceError::InvalidPattern` when the input is malformed. No partial
/// output is produced on error.
pub fn expand(base: &BaseSession, config: &RepeatConfig) -> ServiceResult<Vec<SessionRequest>> {
    expand_with_series_id(base, config, &SeriesId::generate())
}

/// ## Summary
/// Same as [`expand`], using the caller's series identifier.
///
/// Output order is chronological by week, then by pattern order within the
/// week, with the synthesized base pattern first. The base pattern's week-0
/// occurrence is the base session itself and is never emitted.
///
/// ## Errors
/// Returns `ServiceError::InvalidBaseSession` if the base session is invalid,
/// `ServiceError::InvalidRepeatConfig` if `weeks` is zero or the series runs
/// past the supported calendar range, and `ServiceError::InvalidPattern` for
/// a bad weekday or override, or a pattern duration that ends past that range.
#[tracing::instrument(skip(base, config), fields(
    series_id = %series_id,
    enabled = config.enabled,
    weeks = config.weeks,
    patterns = config.patterns.len()
))]
pub fn expand_with_series_id(
    base: &BaseSession,
    config: &RepeatConfig,
    series_id: &SeriesId,
) -> ServiceResult<Vec<SessionRequest>> {
    base.validate()?;

    if !config.enabled {
        tracing::debug!("Repeat disabled, nothing to expand");
        return Ok(Vec::new());
    }

    let user_patterns = config.resolve_patterns()?;

    let frame = BaseFrame {
        date: base.starts_at.date(),
        weekday: base.weekday(),
        start_time: base.start_time(),
        duration_minutes: base.duration_minutes(),
        series_id,
    };

    let last_offset = u64::from(config.weeks - 1) * u64::from(DAYS_PER_WEEK)
        + u64::from(DAYS_PER_WEEK - 1);
    if frame.date.checked_add_days(Days::new(last_offset)).is_none() {
        return Err(ServiceError::InvalidRepeatConfig(format!(
            "{} weeks from {} runs beyond the supported calendar range",
            config.weeks, frame.date
        )));
    }

    // The synthesized base pattern carries no user index.
    let base_pattern = Pattern::base(frame.weekday, frame.start_time, frame.duration_minutes);
    let effective: Vec<(Option<usize>, &Pattern, DayOfWeek)> =
        std::iter::once((None, &base_pattern, frame.weekday))
            .chain(
                user_patterns
                    .into_iter()
                    .enumerate()
                    .map(|(index, (pattern, weekday))| (Some(index), pattern, weekday)),
            )
            .collect();

    let mut requests = Vec::new();
    for week in 0..config.weeks {
        for &(index, pattern, weekday) in &effective {
            if pattern.is_base && week == 0 {
                continue;
            }
            requests.push(build_occurrence(&frame, index, pattern, weekday, week)?);
        }
    }

    tracing::debug!(
        count = requests.len(),
        base_weekday = %frame.weekday,
        base_duration_minutes = frame.duration_minutes,
        "Expanded series"
    );

    Ok(requests)
}

fn build_occurrence(
    frame: &BaseFrame<'_>,
    index: Option<usize>,
    pattern: &Pattern,
    weekday: DayOfWeek,
    week: u32,
) -> ServiceResult<SessionRequest> {
    let diff_days =
        u64::from(frame.weekday.days_until(weekday)) + u64::from(week) * u64::from(DAYS_PER_WEEK);
    let date = frame
        .date
        .checked_add_days(Days::new(diff_days))
        .ok_or_else(|| {
            ServiceError::InvalidRepeatConfig(format!(
                "series extends {diff_days} days past {}, beyond the supported calendar range",
                frame.date
            ))
        })?;

    let start_time = resolve_clock(pattern.start_time.as_deref(), frame.start_time);
    let starts_at = at_hour_minute(date, start_time);
    let ends_at = resolve_end(frame, index, pattern, date, start_time, starts_at)?;

    tracing::trace!(
        week,
        weekday = %weekday,
        is_base = pattern.is_base,
        %starts_at,
        %ends_at,
        "Built occurrence"
    );

    Ok(SessionRequest {
        series_id: frame.series_id.clone(),
        starts_at,
        ends_at,
        overrides: pattern.overrides.explicit(),
    })
}

/// Parses an optional `HH:MM` value, falling back when it is absent, blank or malformed.
fn resolve_clock(value: Option<&str>, fallback: NaiveTime) -> NaiveTime {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw) => parse_hh_mm(raw).unwrap_or_else(|err| {
            tracing::debug!(value = raw, error = %err, "Unparseable pattern time, using fallback");
            fallback
        }),
        None => fallback,
    }
}

/// Reports an end that cannot be represented, blaming the pattern when a
/// user pattern caused it.
fn out_of_range(index: Option<usize>, starts_at: NaiveDateTime, minutes: i64) -> ServiceError {
    let reason =
        format!("occurrence at {starts_at} lasting {minutes} minutes ends beyond the supported calendar range");
    match index {
        Some(index) => ServiceError::InvalidPattern { index, reason },
        None => ServiceError::InvalidRepeatConfig(reason),
    }
}

fn resolve_end(
    frame: &BaseFrame<'_>,
    index: Option<usize>,
    pattern: &Pattern,
    date: NaiveDate,
    start_time: NaiveTime,
    starts_at: NaiveDateTime,
) -> ServiceResult<NaiveDateTime> {
    let has_end_time = pattern
        .end_time
        .as_deref()
        .is_some_and(|v| !v.trim().is_empty());

    let ends_at = if has_end_time {
        at_hour_minute(date, resolve_clock(pattern.end_time.as_deref(), start_time))
    } else {
        let minutes = pattern
            .duration_minutes
            .filter(|m| *m > 0)
            .unwrap_or(frame.duration_minutes);
        TimeDelta::try_minutes(minutes)
            .and_then(|delta| starts_at.checked_add_signed(delta))
            .ok_or_else(|| out_of_range(index, starts_at, minutes))?
    };

    // Sessions shorter than a minute are stretched to one minute.
    let minimum = TimeDelta::minutes(1);
    if ends_at - starts_at < minimum {
        return starts_at
            .checked_add_signed(minimum)
            .ok_or_else(|| out_of_range(index, starts_at, 1));
    }
    Ok(ends_at)
}

/// A series expansion that has not been submitted anywhere.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPreview {
    pub series_id: SeriesId,
    pub occurrences: Vec<SessionRequest>,
}

/// ## Summary
/// Expands a series under a new identifier without persisting anything.
///
/// ## Errors
/// Propagates the validation errors of [`expand_with_series_id`].
pub fn preview(base: &BaseSession, config: &RepeatConfig) -> ServiceResult<SeriesPreview> {
    let series_id = SeriesId::generate();
    let occurrences = expand_with_series_id(base, config, &series_id)?;
    Ok(SeriesPreview {
        series_id,
        occurrences,
    })
}
