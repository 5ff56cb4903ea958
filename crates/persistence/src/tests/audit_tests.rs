// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use atrium_audit::AuditEvent;

use super::create_test_audit_event;
use crate::Persistence;

#[test]
fn test_audit_event_round_trip() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let event: AuditEvent = create_test_audit_event("7");

    let audit_event_id: i64 = persistence.persist_audit_event(&event).unwrap();
    let stored: Vec<AuditEvent> = persistence
        .list_audit_events_for_subject("event", "7")
        .unwrap();

    assert!(audit_event_id > 0);
    assert_eq!(stored, vec![event]);
}

#[test]
fn test_audit_events_are_scoped_to_subject() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence
        .persist_audit_event(&create_test_audit_event("1"))
        .unwrap();
    persistence
        .persist_audit_event(&create_test_audit_event("2"))
        .unwrap();
    persistence
        .persist_audit_event(&create_test_audit_event("2"))
        .unwrap();

    assert_eq!(persistence.count_audit_events().unwrap(), 3);
    assert_eq!(
        persistence
            .list_audit_events_for_subject("event", "2")
            .unwrap()
            .len(),
        2
    );
    assert!(
        persistence
            .list_audit_events_for_subject("user", "1")
            .unwrap()
            .is_empty()
    );
}
