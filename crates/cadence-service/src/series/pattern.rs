use cadence_core::types::DayOfWeek;
use cadence_core::util::clock::format_hh_mm;
use chrono::{NaiveTime, TimeDelta};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::model::SessionOverrides;
use crate::error::{ServiceError, ServiceResult};

/// One weekly recurrence rule.
///
/// `weekday` is Sunday-based (0 = Sunday). `end_time` wins over
/// `duration_minutes`; when both are absent the base session's length is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pattern {
    pub weekday: i32,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<i64>,
    /// Marks the pattern synthesized from the base session. Never read from input.
    #[serde(skip)]
    pub is_base: bool,
    #[serde(flatten)]
    pub overrides: SessionOverrides,
}

impl Pattern {
    #[must_use]
    pub fn on(weekday: i32) -> Self {
        Self {
            weekday,
            ..Self::default()
        }
    }

    /// ## Summary
    /// The pattern mirroring the base session's own weekday, time and length.
    #[must_use]
    pub fn base(weekday: DayOfWeek, start_time: NaiveTime, duration_minutes: i64) -> Self {
        Self {
            weekday: i32::from(weekday.index()),
            start_time: Some(format_hh_mm(start_time)),
            end_time: None,
            duration_minutes: Some(duration_minutes),
            is_base: true,
            overrides: SessionOverrides::default(),
        }
    }

    #[must_use]
    pub fn starting_at(mut self, start_time: &str) -> Self {
        self.start_time = Some(start_time.to_string());
        self
    }

    #[must_use]
    pub fn ending_at(mut self, end_time: &str) -> Self {
        self.end_time = Some(end_time.to_string());
        self
    }

    #[must_use]
    pub fn lasting(mut self, minutes: i64) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: SessionOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// ## Summary
    /// Validates the pattern and resolves its weekday.
    ///
    /// `index` is the pattern's position in the caller's list and is only used
    /// for error reporting.
    ///
    /// ## Errors
    /// Returns `ServiceError::InvalidPattern` if the weekday is outside 0..=6,
    /// the duration cannot be represented, the capacity override is not
    /// positive or the price override is negative.
    pub fn resolve_weekday(&self, index: usize) -> ServiceResult<DayOfWeek> {
        let weekday = DayOfWeek::from_index(self.weekday).map_err(|err| {
            ServiceError::InvalidPattern {
                index,
                reason: err.to_string(),
            }
        })?;

        if let Some(capacity) = self.overrides.capacity_max
            && capacity <= 0
        {
            return Err(ServiceError::InvalidPattern {
                index,
                reason: format!("capacity_max override must be positive, got {capacity}"),
            });
        }

        if let Some(minutes) = self.duration_minutes
            && TimeDelta::try_minutes(minutes).is_none()
        {
            return Err(ServiceError::InvalidPattern {
                index,
                reason: format!("duration_minutes is out of range: {minutes}"),
            });
        }

        if let Some(price) = self.overrides.price_decimal
            && price < Decimal::ZERO
        {
            return Err(ServiceError::InvalidPattern {
                index,
                reason: format!("price_decimal override must not be negative, got {price}"),
            });
        }

        Ok(weekday)
    }
}

/// Weekly repeat settings attached to a base session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepeatConfig {
    pub enabled: bool,
    /// Total span in weeks, counting the week that holds the base session.
    pub weeks: u32,
    /// User-added patterns. The base pattern is synthesized and never listed here.
    pub patterns: Vec<Pattern>,
}

impl RepeatConfig {
    #[must_use]
    pub fn weekly(weeks: u32) -> Self {
        Self {
            enabled: true,
            weeks,
            patterns: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    /// ## Summary
    /// Checks the repeat span and every user pattern, returning each pattern
    /// paired with its resolved weekday.
    ///
    /// ## Errors
    /// Returns `ServiceError::InvalidRepeatConfig` if `weeks` is zero, or the
    /// first `ServiceError::InvalidPattern` found among the patterns.
    pub fn resolve_patterns(&self) -> ServiceResult<Vec<(&Pattern, DayOfWeek)>> {
        if self.weeks < 1 {
            return Err(ServiceError::InvalidRepeatConfig(format!(
                "weeks must be at least 1, got {}",
                self.weeks
            )));
        }

        self.patterns
            .iter()
            .enumerate()
            .map(|(index, pattern)| Ok((pattern, pattern.resolve_weekday(index)?)))
            .collect()
    }
}
