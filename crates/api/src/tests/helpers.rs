// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use async_trait::async_trait;
use atrium::{DirectoryLookup, EventStore, LookupError, StoreError};
use atrium_audit::{Actor, AuditEvent, AuditSink, AuditSinkError, Cause};
use atrium_domain::{DepartmentRecord, Event, EventRange, NewEvent, UnitRecord, UserRecord};
use atrium_persistence::{DirectorySeed, Persistence, SharedPersistence};

use crate::{CreateEventRequest, CreateEventResponse, EventPolicy, create_event};

const TEST_SEED: &str = r#"{
    "departments": [
        { "code": "ENG", "name": "Engineering", "units": ["Backend", "Frontend"] },
        { "code": "OPS", "name": "Operations", "units": ["Backend"] }
    ],
    "users": [
        { "email": "alice@co.com", "name": "Alice" },
        { "email": "bob@co.com", "name": "Bob" }
    ]
}"#;

/// An in-memory store holding the test directory.
pub fn create_test_store() -> SharedPersistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence
        .apply_seed(&DirectorySeed::from_json_str(TEST_SEED).unwrap())
        .unwrap();
    SharedPersistence::new(persistence)
}

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("alice@co.com"), String::from("user"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("api-req-1"), String::from("API request"))
}

/// A timed request from 09:00 to 10:30 UTC on 2024-03-01.
pub fn create_test_request() -> CreateEventRequest {
    CreateEventRequest {
        title: String::from("Planning"),
        start_date_time: String::from("2024-03-01T09:00:00Z"),
        end_time: Some(String::from("10:30")),
        ..CreateEventRequest::default()
    }
}

/// Runs `create_event` against `store` for every port with the UTC policy.
pub async fn create_with(
    store: &SharedPersistence,
    request: CreateEventRequest,
) -> Result<CreateEventResponse, crate::ApiError> {
    create_event(
        store,
        store,
        store,
        &EventPolicy::default(),
        request,
        &create_test_actor(),
        create_test_cause(),
    )
    .await
}

/// An audit sink that always fails.
pub struct FailingAuditSink;

#[async_trait]
impl AuditSink for FailingAuditSink {
    async fn record(&self, _event: &AuditEvent) -> Result<(), AuditSinkError> {
        Err(AuditSinkError::Unavailable(String::from("audit log offline")))
    }
}

/// An event store that always fails.
pub struct FailingEventStore;

#[async_trait]
impl EventStore for FailingEventStore {
    async fn create_event(&self, _event: &NewEvent) -> Result<Event, StoreError> {
        Err(StoreError::Backend(String::from("disk full")))
    }

    async fn get_event(&self, _event_id: i64) -> Result<Option<Event>, StoreError> {
        Err(StoreError::Backend(String::from("disk full")))
    }

    async fn list_events(&self, _range: &EventRange) -> Result<Vec<Event>, StoreError> {
        Err(StoreError::Backend(String::from("disk full")))
    }
}

/// A directory whose every lookup fails.
pub struct FailingDirectoryLookup;

fn directory_offline<T>() -> Result<Vec<T>, LookupError> {
    Err(LookupError::Backend(String::from("directory offline")))
}

#[async_trait]
impl DirectoryLookup for FailingDirectoryLookup {
    async fn find_users_by_emails(
        &self,
        _emails: &[String],
    ) -> Result<Vec<UserRecord>, LookupError> {
        directory_offline()
    }

    async fn find_users_by_ids(&self, _ids: &[i64]) -> Result<Vec<UserRecord>, LookupError> {
        directory_offline()
    }

    async fn find_departments_by_codes(
        &self,
        _codes: &[String],
    ) -> Result<Vec<DepartmentRecord>, LookupError> {
        directory_offline()
    }

    async fn find_departments_by_names(
        &self,
        _names: &[String],
    ) -> Result<Vec<DepartmentRecord>, LookupError> {
        directory_offline()
    }

    async fn find_departments_by_ids(
        &self,
        _ids: &[i64],
    ) -> Result<Vec<DepartmentRecord>, LookupError> {
        directory_offline()
    }

    async fn find_units_by_ids(&self, _ids: &[i64]) -> Result<Vec<UnitRecord>, LookupError> {
        directory_offline()
    }

    async fn find_units_by_names(
        &self,
        _names: &[String],
    ) -> Result<Vec<UnitRecord>, LookupError> {
        directory_offline()
    }

    async fn find_units_by_department_and_name(
        &self,
        _pairs: &[(i64, String)],
    ) -> Result<Vec<UnitRecord>, LookupError> {
        directory_offline()
    }
}
