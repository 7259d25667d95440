//! Session storage collaborator.
//!
//! ## Summary
//! The expander only produces requests; persisting them is the job of a
//! session store. The store owns defaulting: an override absent from a
//! request resolves to the series' base value when the session is stored.

pub mod memory;

use std::future::Future;
use std::pin::Pin;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::ServiceResult;
use crate::series::model::{BaseSession, SeriesId, SessionRequest};

pub use memory::InMemorySessionStore;

pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = ServiceResult<T>> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Scheduled,
    Cancelled,
}

/// A session as persisted by the store, with every field resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    pub id: uuid::Uuid,
    pub series_id: SeriesId,
    pub is_base: bool,
    pub status: SessionStatus,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub activity_type: String,
    pub stylist_id: String,
    pub service_id: Option<String>,
    pub capacity_max: i32,
    pub price_decimal: Decimal,
    pub notes: Option<String>,
}

impl StoredSession {
    #[must_use]
    pub fn from_base(series_id: &SeriesId, base: &BaseSession) -> Self {
        Self {
            id: uuid::Uuid::now_v7(),
            series_id: series_id.clone(),
            is_base: true,
            status: SessionStatus::Scheduled,
            starts_at: base.starts_at,
            ends_at: base.ends_at,
            activity_type: base.activity_type.clone(),
            stylist_id: base.stylist_id.clone(),
            service_id: base.service_id.clone(),
            capacity_max: base.capacity_max,
            price_decimal: base.price_decimal,
            notes: base.notes.clone(),
        }
    }

    /// ## Summary
    /// Materializes a generated request, taking every absent override from `base`.
    #[must_use]
    pub fn from_request(request: &SessionRequest, base: &BaseSession) -> Self {
        let overrides = &request.overrides;
        Self {
            id: uuid::Uuid::now_v7(),
            series_id: request.series_id.clone(),
            is_base: false,
            status: SessionStatus::Scheduled,
            starts_at: request.starts_at,
            ends_at: request.ends_at,
            activity_type: overrides
                .activity_type
                .clone()
                .unwrap_or_else(|| base.activity_type.clone()),
            stylist_id: overrides
                .stylist_id
                .clone()
                .unwrap_or_else(|| base.stylist_id.clone()),
            service_id: overrides
                .service_id
                .clone()
                .or_else(|| base.service_id.clone()),
            capacity_max: overrides.capacity_max.unwrap_or(base.capacity_max),
            price_decimal: overrides.price_decimal.unwrap_or(base.price_decimal),
            notes: overrides.notes.clone().or_else(|| base.notes.clone()),
        }
    }
}

/// Persistence for series sessions.
///
/// Implementations decide how to treat overlapping sessions; nothing here
/// checks for collisions.
pub trait SessionStore: Send + Sync {
    /// Stores the base session of a new series.
    fn create_base_session<'a>(
        &'a self,
        series_id: &'a SeriesId,
        base: &'a BaseSession,
    ) -> StoreFuture<'a, StoredSession>;

    /// Stores one generated occurrence. The series' base must already exist.
    fn create_session<'a>(&'a self, request: &'a SessionRequest) -> StoreFuture<'a, StoredSession>;

    /// Lists every session of a series, base first, in creation order.
    fn series_sessions<'a>(&'a self, series_id: &'a SeriesId)
    -> StoreFuture<'a, Vec<StoredSession>>;

    /// Cancels every scheduled session of a series, returning how many changed.
    fn cancel_series<'a>(&'a self, series_id: &'a SeriesId) -> StoreFuture<'a, usize>;
}
