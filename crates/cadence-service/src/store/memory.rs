use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{SessionStatus, SessionStore, StoreFuture, StoredSession};
use crate::error::{ServiceError, ServiceResult};
use crate::series::model::{BaseSession, SeriesId, SessionRequest};

#[derive(Debug)]
struct SeriesRecord {
    base: BaseSession,
    sessions: Vec<StoredSession>,
}

/// Process-local session store.
///
/// Backs the HTTP service when no external storage is configured, and the tests.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    series: RwLock<HashMap<SeriesId, SeriesRecord>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks the series map for reading and recovers from poisoning.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<SeriesId, SeriesRecord>> {
        match self.series.read() {
            Ok(guard) => guard,
            Err(poisoned) => {
                self.series.clear_poison();
                poisoned.into_inner()
            }
        }
    }

    /// Locks the series map for writing and recovers from poisoning.
    fn write(&self) -> RwLockWriteGuard<'_, HashMap<SeriesId, SeriesRecord>> {
        match self.series.write() {
            Ok(guard) => guard,
            Err(poisoned) => {
                self.series.clear_poison();
                poisoned.into_inner()
            }
        }
    }

    fn insert_base(&self, series_id: &SeriesId, base: &BaseSession) -> ServiceResult<StoredSession> {
        let mut series = self.write();
        if series.contains_key(series_id) {
            return Err(ServiceError::Conflict(format!(
                "series {series_id} already has a base session"
            )));
        }

        let stored = StoredSession::from_base(series_id, base);
        series.insert(
            series_id.clone(),
            SeriesRecord {
                base: base.clone(),
                sessions: vec![stored.clone()],
            },
        );
        tracing::debug!(%series_id, session_id = %stored.id, "Stored base session");
        Ok(stored)
    }

    fn insert_occurrence(&self, request: &SessionRequest) -> ServiceResult<StoredSession> {
        let mut series = self.write();
        let record = series.get_mut(&request.series_id).ok_or_else(|| {
            ServiceError::NotFound(format!(
                "series {} has no base session",
                request.series_id
            ))
        })?;

        let stored = StoredSession::from_request(request, &record.base);
        record.sessions.push(stored.clone());
        tracing::trace!(
            series_id = %request.series_id,
            session_id = %stored.id,
            starts_at = %stored.starts_at,
            "Stored occurrence"
        );
        Ok(stored)
    }

    fn list(&self, series_id: &SeriesId) -> ServiceResult<Vec<StoredSession>> {
        self.read()
            .get(series_id)
            .map(|record| record.sessions.clone())
            .ok_or_else(|| ServiceError::NotFound(format!("series {series_id}")))
    }

    fn cancel(&self, series_id: &SeriesId) -> ServiceResult<usize> {
        let mut series = self.write();
        let record = series
            .get_mut(series_id)
            .ok_or_else(|| ServiceError::NotFound(format!("series {series_id}")))?;

        let mut cancelled = 0;
        for session in record
            .sessions
            .iter_mut()
            .filter(|s| s.status == SessionStatus::Scheduled)
        {
            session.status = SessionStatus::Cancelled;
            cancelled += 1;
        }
        tracing::debug!(%series_id, cancelled, "Cancelled series");
        Ok(cancelled)
    }
}

impl SessionStore for InMemorySessionStore {
    fn create_base_session<'a>(
        &'a self,
        series_id: &'a SeriesId,
        base: &'a BaseSession,
    ) -> StoreFuture<'a, StoredSession> {
        Box::pin(std::future::ready(self.insert_base(series_id, base)))
    }

    fn create_session<'a>(&'a self, request: &'a SessionRequest) -> StoreFuture<'a, StoredSession> {
        Box::pin(std::future::ready(self.insert_occurrence(request)))
    }

    fn series_sessions<'a>(
        &'a self,
        series_id: &'a SeriesId,
    ) -> StoreFuture<'a, Vec<StoredSession>> {
        Box::pin(std::future::ready(self.list(series_id)))
    }

    fn cancel_series<'a>(&'a self, series_id: &'a SeriesId) -> StoreFuture<'a, usize> {
        Box::pin(std::future::ready(self.cancel(series_id)))
    }
}
