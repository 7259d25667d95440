//! Raw series input as submitted by a form or an API client.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::model::BaseSession;
use super::pattern::{Pattern, RepeatConfig};
use crate::error::{ServiceError, ServiceResult};

const LOCAL_DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Parse a naive local datetime such as `2024-03-04T09:00`.
///
/// ## Errors
/// Returns `ServiceError::InvalidBaseSession` naming `field` if none of the
/// accepted layouts match.
pub fn parse_local_datetime(field: &str, value: &str) -> ServiceResult<NaiveDateTime> {
    let trimmed = value.trim();
    LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| {
            ServiceError::InvalidBaseSession(format!("{field} is not a valid local datetime: {value:?}"))
        })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseSessionInput {
    pub starts_at: String,
    pub ends_at: String,
    pub activity_type: String,
    pub stylist_id: String,
    #[serde(default)]
    pub service_id: Option<String>,
    pub capacity_max: i32,
    pub price_decimal: Decimal,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TryFrom<BaseSessionInput> for BaseSession {
    type Error = ServiceError;

    fn try_from(input: BaseSessionInput) -> ServiceResult<Self> {
        let session = Self {
            starts_at: parse_local_datetime("startsAt", &input.starts_at)?,
            ends_at: parse_local_datetime("endsAt", &input.ends_at)?,
            activity_type: input.activity_type,
            stylist_id: input.stylist_id,
            service_id: non_blank(input.service_id),
            capacity_max: input.capacity_max,
            price_decimal: input.price_decimal,
            notes: non_blank(input.notes),
        };
        session.validate()?;
        Ok(session)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatConfigInput {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_weeks")]
    pub weeks: i64,
    #[serde(default)]
    pub patterns: Vec<Pattern>,
}

const fn default_weeks() -> i64 {
    1
}

impl TryFrom<RepeatConfigInput> for RepeatConfig {
    type Error = ServiceError;

    fn try_from(input: RepeatConfigInput) -> ServiceResult<Self> {
        // A disabled repeat section may carry leftover values; it expands to nothing anyway.
        let weeks = if input.enabled {
            u32::try_from(input.weeks)
                .ok()
                .filter(|weeks| *weeks >= 1)
                .ok_or_else(|| {
                    ServiceError::InvalidRepeatConfig(format!(
                        "weeks must be at least 1, got {}",
                        input.weeks
                    ))
                })?
        } else {
            u32::try_from(input.weeks).unwrap_or(1).max(1)
        };

        Ok(Self {
            enabled: input.enabled,
            weeks,
            patterns: input.patterns,
        })
    }
}

/// A base session together with its repeat settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesInput {
    pub base: BaseSessionInput,
    #[serde(default)]
    pub repeat: RepeatConfigInput,
}

impl SeriesInput {
    /// ## Summary
    /// Parses and validates both halves of the input.
    ///
    /// ## Errors
    /// Returns `ServiceError::InvalidBaseSession` or
    /// `ServiceError::InvalidRepeatConfig` for malformed values.
    pub fn into_parts(self) -> ServiceResult<(BaseSession, RepeatConfig)> {
        let base = BaseSession::try_from(self.base)?;
        let repeat = RepeatConfig::try_from(self.repeat)?;
        Ok((base, repeat))
    }
}
