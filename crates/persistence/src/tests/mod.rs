// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod audit_tests;
mod directory_tests;
mod event_tests;
mod shared_tests;

use atrium_audit::{Action, Actor, AuditEvent, Cause, Subject};
use atrium_domain::{EventTiming, NewEvent};
use chrono::{DateTime, Utc};

use crate::Persistence;
use crate::seed::DirectorySeed;

pub const TEST_SEED: &str = r#"{
    "departments": [
        { "code": "ENG", "name": "Engineering", "units": ["Backend", "Frontend"] },
        { "code": "OPS", "name": "Operations", "units": ["Backend", "Night Shift"] }
    ],
    "users": [
        { "email": "Alice@Co.com", "name": "Alice" },
        { "email": "bob@co.com", "name": "Bob" }
    ]
}"#;

/// Creates an in-memory database with the test seed applied.
pub fn seeded_persistence() -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seed: DirectorySeed = DirectorySeed::from_json_str(TEST_SEED).unwrap();
    persistence.apply_seed(&seed).unwrap();
    persistence
}

pub fn instant(value: &str) -> DateTime<Utc> {
    value.parse::<DateTime<Utc>>().expect("valid RFC 3339 instant")
}

/// Builds an event with no relations between the two instants.
pub fn new_event(title: &str, start: &str, end: &str) -> NewEvent {
    NewEvent {
        title: title.to_string(),
        description: None,
        tags: Vec::new(),
        link: None,
        timing: EventTiming {
            start: instant(start),
            end: instant(end),
            end_time: None,
            is_all_day: false,
        },
        is_global: false,
        user_ids: Vec::new(),
        department_ids: Vec::new(),
        unit_ids: Vec::new(),
        created_by: String::from("test-actor"),
    }
}

pub fn create_test_audit_event(subject_id: &str) -> AuditEvent {
    AuditEvent::new(
        Actor::new(String::from("test-actor"), String::from("user")),
        Cause::new(String::from("req-1"), String::from("Test operation")),
        Action::new(String::from("CreateEvent"), Some(String::from("Standup"))),
        Subject::new(String::from("event"), subject_id.to_string()),
    )
}
