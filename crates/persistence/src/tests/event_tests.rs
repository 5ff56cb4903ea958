// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use atrium_domain::{Event, EventRange, NewEvent};

use super::{instant, new_event, seeded_persistence};
use crate::Persistence;
use crate::error::PersistenceError;

fn titles(events: &[Event]) -> Vec<&str> {
    events.iter().map(|event| event.title.as_str()).collect()
}

#[test]
fn test_create_event_round_trips_fields() {
    let mut persistence: Persistence = seeded_persistence();
    let mut event: NewEvent = new_event("Standup", "2024-03-01T10:00:00Z", "2024-03-01T10:30:00Z");
    event.description = Some(String::from("Daily sync"));
    event.tags = vec![String::from("daily"), String::from("team")];
    event.link = Some(String::from("https://meet.example.com/standup"));
    event.timing.end_time = Some(String::from("10:30"));
    event.is_global = true;

    let created: Event = persistence.create_event(&event).unwrap();

    assert!(created.event_id > 0);
    assert_eq!(created.title, "Standup");
    assert_eq!(created.description.as_deref(), Some("Daily sync"));
    assert_eq!(created.tags, vec!["daily", "team"]);
    assert_eq!(created.link.as_deref(), Some("https://meet.example.com/standup"));
    assert_eq!(created.timing, event.timing);
    assert!(created.is_global);
    assert_eq!(created.created_by, "test-actor");
    assert_eq!(created.created_at, created.updated_at);
    assert_eq!(persistence.get_event(created.event_id).unwrap(), Some(created));
}

#[test]
fn test_relations_keep_input_order() {
    let mut persistence: Persistence = seeded_persistence();
    let user_ids: Vec<i64> = persistence
        .list_users()
        .unwrap()
        .into_iter()
        .map(|user| user.user_id)
        .rev()
        .collect();
    let department_ids: Vec<i64> = persistence
        .list_departments()
        .unwrap()
        .into_iter()
        .map(|department| department.department_id)
        .rev()
        .collect();
    let unit_ids: Vec<i64> = persistence
        .list_units(department_ids[1])
        .unwrap()
        .into_iter()
        .map(|unit| unit.unit_id)
        .rev()
        .collect();

    let mut event: NewEvent = new_event("Review", "2024-03-01T10:00:00Z", "2024-03-01T11:00:00Z");
    event.user_ids.clone_from(&user_ids);
    event.department_ids.clone_from(&department_ids);
    event.unit_ids.clone_from(&unit_ids);

    let created: Event = persistence.create_event(&event).unwrap();

    let stored_users: Vec<i64> = created.users.iter().map(|user| user.user_id).collect();
    let stored_departments: Vec<i64> = created
        .departments
        .iter()
        .map(|department| department.department_id)
        .collect();
    let stored_units: Vec<i64> = created.units.iter().map(|unit| unit.unit_id).collect();
    assert_eq!(stored_users, user_ids);
    assert_eq!(stored_departments, department_ids);
    assert_eq!(stored_units, unit_ids);
}

#[test]
fn test_unknown_relation_rolls_back_the_event() {
    let mut persistence: Persistence = seeded_persistence();
    let mut event: NewEvent = new_event("Ghost", "2024-03-01T10:00:00Z", "2024-03-01T11:00:00Z");
    event.user_ids = vec![9_999];

    let result: Result<Event, PersistenceError> = persistence.create_event(&event);

    assert!(result.is_err());
    assert!(
        persistence
            .list_events(&EventRange::default())
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_get_missing_event_is_none() {
    let mut persistence: Persistence = seeded_persistence();
    assert_eq!(persistence.get_event(42).unwrap(), None);
}

#[test]
fn test_list_events_orders_by_start() {
    let mut persistence: Persistence = seeded_persistence();
    persistence
        .create_event(&new_event("Late", "2024-03-01T15:00:00Z", "2024-03-01T16:00:00Z"))
        .unwrap();
    persistence
        .create_event(&new_event("Early", "2024-03-01T08:00:00Z", "2024-03-01T09:00:00Z"))
        .unwrap();
    persistence
        .create_event(&new_event("Also early", "2024-03-01T08:00:00Z", "2024-03-01T08:30:00Z"))
        .unwrap();

    let events: Vec<Event> = persistence.list_events(&EventRange::default()).unwrap();

    assert_eq!(titles(&events), vec!["Early", "Also early", "Late"]);
}

#[test]
fn test_list_events_filters_by_overlap() {
    let mut persistence: Persistence = seeded_persistence();
    persistence
        .create_event(&new_event("Before", "2024-03-01T08:00:00Z", "2024-03-01T09:00:00Z"))
        .unwrap();
    persistence
        .create_event(&new_event("Straddles", "2024-03-01T09:30:00Z", "2024-03-01T10:30:00Z"))
        .unwrap();
    persistence
        .create_event(&new_event("Inside", "2024-03-01T10:15:00Z", "2024-03-01T10:45:00Z"))
        .unwrap();
    persistence
        .create_event(&new_event("After", "2024-03-01T11:00:00Z", "2024-03-01T12:00:00Z"))
        .unwrap();

    let range: EventRange = EventRange {
        from: Some(instant("2024-03-01T10:00:00Z")),
        to: Some(instant("2024-03-01T11:00:00Z")),
    };
    let events: Vec<Event> = persistence.list_events(&range).unwrap();

    assert_eq!(titles(&events), vec!["Straddles", "Inside"]);
}

#[test]
fn test_list_events_with_only_lower_bound() {
    let mut persistence: Persistence = seeded_persistence();
    persistence
        .create_event(&new_event("Old", "2024-02-01T08:00:00Z", "2024-02-01T09:00:00Z"))
        .unwrap();
    persistence
        .create_event(&new_event("New", "2024-04-01T08:00:00Z", "2024-04-01T09:00:00Z"))
        .unwrap();

    let range: EventRange = EventRange {
        from: Some(instant("2024-03-01T00:00:00Z")),
        to: None,
    };

    assert_eq!(titles(&persistence.list_events(&range).unwrap()), vec!["New"]);
}
