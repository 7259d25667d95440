use cadence_core::types::DayOfWeek;
use chrono::{NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ServiceError, ServiceResult};

/// Opaque identifier shared by every session of one series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesId(String);

impl SeriesId {
    /// ## Summary
    /// Generates a fresh, collision-resistant series identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SeriesId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The occurrence entered by hand, from which a series is expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseSession {
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub activity_type: String,
    pub stylist_id: String,
    pub service_id: Option<String>,
    pub capacity_max: i32,
    pub price_decimal: Decimal,
    pub notes: Option<String>,
}

impl BaseSession {
    /// ## Summary
    /// Checks the base session invariants.
    ///
    /// ## Errors
    /// Returns `ServiceError::InvalidBaseSession` if the session ends at or
    /// before it starts, if `activity_type` or `stylist_id` is blank, if
    /// `capacity_max` is not positive or if `price_decimal` is negative.
    pub fn validate(&self) -> ServiceResult<()> {
        if self.ends_at <= self.starts_at {
            return Err(ServiceError::InvalidBaseSession(format!(
                "ends_at ({}) must be after starts_at ({})",
                self.ends_at, self.starts_at
            )));
        }
        if self.activity_type.trim().is_empty() {
            return Err(ServiceError::InvalidBaseSession(
                "activity_type must not be empty".to_string(),
            ));
        }
        if self.stylist_id.trim().is_empty() {
            return Err(ServiceError::InvalidBaseSession(
                "stylist_id is required".to_string(),
            ));
        }
        if self.capacity_max <= 0 {
            return Err(ServiceError::InvalidBaseSession(format!(
                "capacity_max must be positive, got {}",
                self.capacity_max
            )));
        }
        if self.price_decimal < Decimal::ZERO {
            return Err(ServiceError::InvalidBaseSession(format!(
                "price_decimal must not be negative, got {}",
                self.price_decimal
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn weekday(&self) -> DayOfWeek {
        DayOfWeek::of_date(self.starts_at.date())
    }

    #[must_use]
    pub fn start_time(&self) -> NaiveTime {
        self.starts_at.time()
    }

    /// ## Summary
    /// Length of the session in whole minutes, rounded half up and never
    /// below one minute.
    #[must_use]
    pub fn duration_minutes(&self) -> i64 {
        let seconds = (self.ends_at - self.starts_at).num_seconds();
        (seconds + 30).div_euclid(60).max(1)
    }
}

/// Per-occurrence field overrides.
///
/// `None` means "inherit from the base session". The storage side performs
/// that inheritance, so absent fields must stay absent on the way out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stylist_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_max: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_decimal: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SessionOverrides {
    /// ## Summary
    /// Keeps only the overrides that carry a value. Blank strings count as
    /// not provided.
    #[must_use]
    pub fn explicit(&self) -> Self {
        fn non_blank(value: Option<&String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty()).cloned()
        }

        Self {
            stylist_id: non_blank(self.stylist_id.as_ref()),
            service_id: non_blank(self.service_id.as_ref()),
            activity_type: non_blank(self.activity_type.as_ref()),
            capacity_max: self.capacity_max,
            price_decimal: self.price_decimal,
            notes: non_blank(self.notes.as_ref()),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One generated session-creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest {
    pub series_id: SeriesId,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    #[serde(flatten)]
    pub overrides: SessionOverrides,
}
