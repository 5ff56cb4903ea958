// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use atrium::{DirectoryLookup, EventStore, ParticipantRequest, ResolvedParticipants};
use atrium_audit::{AuditSink, notify_best_effort};
use atrium_domain::{Event, EventRange, NewEvent};

use super::{create_test_audit_event, new_event, seeded_persistence};
use crate::SharedPersistence;

fn shared() -> SharedPersistence {
    SharedPersistence::new(seeded_persistence())
}

#[tokio::test]
async fn test_lookup_port_reads_the_directory() {
    let store: SharedPersistence = shared();

    let users = store
        .find_users_by_emails(&[String::from("BOB@co.com")])
        .await
        .unwrap();
    let departments = store
        .find_departments_by_codes(&[String::from("ENG")])
        .await
        .unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(departments.len(), 1);
    assert_eq!(departments[0].name, "Engineering");
}

#[tokio::test]
async fn test_resolution_runs_against_the_database() {
    let store: SharedPersistence = shared();
    let users: Vec<String> = vec![String::from("alice@co.com")];
    let departments: Vec<String> = vec![String::from("Operations")];
    let units: Vec<String> = vec![String::from("ENG:Backend"), String::from("Night Shift")];

    let resolved: ResolvedParticipants = atrium::resolve_participants(
        &store,
        &ParticipantRequest {
            users: &users,
            departments: &departments,
            units: &units,
        },
    )
    .await
    .unwrap();

    assert_eq!(resolved.user_ids.len(), 1);
    assert_eq!(resolved.department_ids.len(), 1);
    assert_eq!(resolved.unit_ids.len(), 2);
}

#[tokio::test]
async fn test_event_store_port_round_trip() {
    let store: SharedPersistence = shared();
    let event: NewEvent = new_event("Standup", "2024-03-01T10:00:00Z", "2024-03-01T10:30:00Z");

    let created: Event = store.create_event(&event).await.unwrap();
    let fetched: Option<Event> = store.get_event(created.event_id).await.unwrap();
    let listed: Vec<Event> = store.list_events(&EventRange::default()).await.unwrap();

    assert_eq!(fetched.as_ref(), Some(&created));
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn test_audit_sink_persists_events() {
    let store: SharedPersistence = shared();

    store.record(&create_test_audit_event("5")).await.unwrap();
    let delivered: bool = notify_best_effort(&store, &create_test_audit_event("5")).await;

    assert!(delivered);
    assert_eq!(store.lock().await.count_audit_events().unwrap(), 2);
}
