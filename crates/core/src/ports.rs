// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ports to the directory and event store.
//!
//! Every directory method is a batch lookup: one call per key set, returning
//! all records whose field is in the set, in no particular order.

use async_trait::async_trait;
use atrium_domain::{DepartmentRecord, Event, EventRange, NewEvent, UnitRecord, UserRecord};

/// Errors reported by a directory lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The backing store failed.
    #[error("directory lookup failed: {0}")]
    Backend(String),
}

/// Errors reported by the event store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The backing store failed.
    #[error("event store failure: {0}")]
    Backend(String),
}

/// Batch lookups against the user, department and unit directory.
#[async_trait]
pub trait DirectoryLookup: Send + Sync {
    /// Finds users whose (lowercase) email is in `emails`.
    async fn find_users_by_emails(&self, emails: &[String])
    -> Result<Vec<UserRecord>, LookupError>;

    /// Finds users whose ID is in `ids`.
    async fn find_users_by_ids(&self, ids: &[i64]) -> Result<Vec<UserRecord>, LookupError>;

    /// Finds departments whose code is in `codes`.
    async fn find_departments_by_codes(
        &self,
        codes: &[String],
    ) -> Result<Vec<DepartmentRecord>, LookupError>;

    /// Finds departments whose name is in `names`.
    async fn find_departments_by_names(
        &self,
        names: &[String],
    ) -> Result<Vec<DepartmentRecord>, LookupError>;

    /// Finds departments whose ID is in `ids`.
    async fn find_departments_by_ids(
        &self,
        ids: &[i64],
    ) -> Result<Vec<DepartmentRecord>, LookupError>;

    /// Finds units whose ID is in `ids`.
    async fn find_units_by_ids(&self, ids: &[i64]) -> Result<Vec<UnitRecord>, LookupError>;

    /// Finds units whose name is in `names`, across all departments.
    async fn find_units_by_names(&self, names: &[String])
    -> Result<Vec<UnitRecord>, LookupError>;

    /// Finds units matching any of the exact `(department_id, name)` pairs.
    async fn find_units_by_department_and_name(
        &self,
        pairs: &[(i64, String)],
    ) -> Result<Vec<UnitRecord>, LookupError>;
}

/// Reads and writes events.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Creates an event together with its user, department and unit
    /// relations in one atomic write.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; nothing is written in that case.
    async fn create_event(&self, event: &NewEvent) -> Result<Event, StoreError>;

    /// Retrieves one event with its relations expanded.
    async fn get_event(&self, event_id: i64) -> Result<Option<Event>, StoreError>;

    /// Lists events overlapping `range`, ordered by start.
    async fn list_events(&self, range: &EventRange) -> Result<Vec<Event>, StoreError>;
}
