// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Async access to a shared `Persistence`.

use async_trait::async_trait;
use atrium::{DirectoryLookup, EventStore, LookupError, StoreError};
use atrium_audit::{AuditEvent, AuditSink, AuditSinkError};
use atrium_domain::{DepartmentRecord, Event, EventRange, NewEvent, UnitRecord, UserRecord};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::error;

use crate::Persistence;
use crate::error::PersistenceError;

/// A cloneable handle to one `Persistence`.
///
/// Every port method takes the lock for a single query, so lookups issued
/// concurrently by the resolvers interleave instead of deadlocking.
#[derive(Clone)]
pub struct SharedPersistence {
    inner: Arc<Mutex<Persistence>>,
}

impl SharedPersistence {
    #[must_use]
    pub fn new(persistence: Persistence) -> Self {
        Self {
            inner: Arc::new(Mutex::new(persistence)),
        }
    }

    /// Locks the underlying adapter for direct use.
    pub async fn lock(&self) -> MutexGuard<'_, Persistence> {
        self.inner.lock().await
    }
}

fn lookup_error(err: PersistenceError) -> LookupError {
    LookupError::Backend(err.to_string())
}

fn store_error(err: PersistenceError) -> StoreError {
    error!(error = %err, "Event store operation failed");
    StoreError::Backend(err.to_string())
}

#[async_trait]
impl DirectoryLookup for SharedPersistence {
    async fn find_users_by_emails(
        &self,
        emails: &[String],
    ) -> Result<Vec<UserRecord>, LookupError> {
        self.lock().await.find_users_by_emails(emails).map_err(lookup_error)
    }

    async fn find_users_by_ids(&self, ids: &[i64]) -> Result<Vec<UserRecord>, LookupError> {
        self.lock().await.find_users_by_ids(ids).map_err(lookup_error)
    }

    async fn find_departments_by_codes(
        &self,
        codes: &[String],
    ) -> Result<Vec<DepartmentRecord>, LookupError> {
        self.lock()
            .await
            .find_departments_by_codes(codes)
            .map_err(lookup_error)
    }

    async fn find_departments_by_names(
        &self,
        names: &[String],
    ) -> Result<Vec<DepartmentRecord>, LookupError> {
        self.lock()
            .await
            .find_departments_by_names(names)
            .map_err(lookup_error)
    }

    async fn find_departments_by_ids(
        &self,
        ids: &[i64],
    ) -> Result<Vec<DepartmentRecord>, LookupError> {
        self.lock()
            .await
            .find_departments_by_ids(ids)
            .map_err(lookup_error)
    }

    async fn find_units_by_ids(&self, ids: &[i64]) -> Result<Vec<UnitRecord>, LookupError> {
        self.lock().await.find_units_by_ids(ids).map_err(lookup_error)
    }

    async fn find_units_by_names(
        &self,
        names: &[String],
    ) -> Result<Vec<UnitRecord>, LookupError> {
        self.lock().await.find_units_by_names(names).map_err(lookup_error)
    }

    async fn find_units_by_department_and_name(
        &self,
        pairs: &[(i64, String)],
    ) -> Result<Vec<UnitRecord>, LookupError> {
        self.lock()
            .await
            .find_units_by_department_and_name(pairs)
            .map_err(lookup_error)
    }
}

#[async_trait]
impl EventStore for SharedPersistence {
    async fn create_event(&self, event: &NewEvent) -> Result<Event, StoreError> {
        self.lock().await.create_event(event).map_err(store_error)
    }

    async fn get_event(&self, event_id: i64) -> Result<Option<Event>, StoreError> {
        self.lock().await.get_event(event_id).map_err(store_error)
    }

    async fn list_events(&self, range: &EventRange) -> Result<Vec<Event>, StoreError> {
        self.lock().await.list_events(range).map_err(store_error)
    }
}

#[async_trait]
impl AuditSink for SharedPersistence {
    async fn record(&self, event: &AuditEvent) -> Result<(), AuditSinkError> {
        self.lock()
            .await
            .persist_audit_event(event)
            .map(|_| ())
            .map_err(|e| AuditSinkError::Unavailable(e.to_string()))
    }
}
