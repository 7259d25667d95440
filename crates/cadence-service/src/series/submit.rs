//! Series submission and cancellation against a session store.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::expand::expand_with_series_id;
use super::model::{BaseSession, SeriesId};
use super::pattern::RepeatConfig;
use crate::error::ServiceResult;
use crate::store::{SessionStore, StoredSession};

/// An occurrence the store refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedOccurrence {
    /// Position of the occurrence in the expanded list.
    pub index: usize,
    pub starts_at: NaiveDateTime,
    pub reason: String,
}

/// Outcome of submitting a series.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSubmission {
    pub series_id: SeriesId,
    pub base: StoredSession,
    pub created: Vec<StoredSession>,
    pub failed: Vec<FailedOccurrence>,
}

impl SeriesSubmission {
    /// Whether every expanded occurrence was stored.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// ## Summary
/// Expands a series and submits the base session plus every occurrence to `store`.
///
/// Occurrences are submitted one by one in expansion order. A refused
/// occurrence is recorded in `failed` and the rest are still submitted;
/// nothing already stored is rolled back.
///
/// ## Side Effects
/// - Creates the base session under a new series id
/// - Creates one session per expanded occurrence
///
/// ## Errors
/// Returns the expansion's validation error before touching the store, or the
/// store's error if the base session cannot be created.
#[tracing::instrument(skip(store, base, config), fields(
    weeks = config.weeks,
    patterns = config.patterns.len(),
    enabled = config.enabled
))]
pub async fn submit_series(
    store: &dyn SessionStore,
    base: &BaseSession,
    config: &RepeatConfig,
) -> ServiceResult<SeriesSubmission> {
    let series_id = SeriesId::generate();
    let requests = expand_with_series_id(base, config, &series_id)?;

    let base_session = store.create_base_session(&series_id, base).await?;

    let mut created = Vec::with_capacity(requests.len());
    let mut failed = Vec::new();
    for (index, request) in requests.iter().enumerate() {
        match store.create_session(request).await {
            Ok(session) => created.push(session),
            Err(err) => {
                tracing::warn!(
                    %series_id,
                    index,
                    starts_at = %request.starts_at,
                    error = %err,
                    "Store refused occurrence"
                );
                failed.push(FailedOccurrence {
                    index,
                    starts_at: request.starts_at,
                    reason: err.to_string(),
                });
            }
        }
    }

    tracing::info!(
        %series_id,
        created = created.len(),
        failed = failed.len(),
        "Series submitted"
    );

    Ok(SeriesSubmission {
        series_id,
        base: base_session,
        created,
        failed,
    })
}

/// ## Summary
/// Cancels every session sharing `series_id`.
///
/// ## Errors
/// Returns `ServiceError::NotFound` if the store knows no such series.
#[tracing::instrument(skip(store), fields(series_id = %series_id))]
pub async fn cancel_series(store: &dyn SessionStore, series_id: &SeriesId) -> ServiceResult<usize> {
    let cancelled = store.cancel_series(series_id).await?;
    tracing::info!(cancelled, "Series cancelled");
    Ok(cancelled)
}
