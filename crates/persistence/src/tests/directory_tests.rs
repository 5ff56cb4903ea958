// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use atrium_domain::{DepartmentRecord, UnitRecord, UserRecord};

use super::seeded_persistence;
use crate::Persistence;
use crate::error::PersistenceError;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

fn department_id(persistence: &mut Persistence, code: &str) -> i64 {
    persistence
        .find_departments_by_codes(&[code.to_string()])
        .unwrap()[0]
        .department_id
}

#[test]
fn test_create_user_normalizes_email() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let user: UserRecord = persistence.create_user("  Carol@Co.COM ", "Carol").unwrap();

    assert_eq!(user.email, "carol@co.com");
    assert_eq!(persistence.find_users_by_ids(&[user.user_id]).unwrap(), vec![user]);
}

#[test]
fn test_duplicate_email_is_unique_violation() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence.create_user("carol@co.com", "Carol").unwrap();

    let result: Result<UserRecord, PersistenceError> =
        persistence.create_user("CAROL@co.com", "Carol Again");

    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn test_unit_requires_existing_department() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let result: Result<UnitRecord, PersistenceError> = persistence.create_unit(999, "Backend");

    assert!(result.is_err());
}

#[test]
fn test_find_users_by_emails_is_case_insensitive() {
    let mut persistence: Persistence = seeded_persistence();

    let users: Vec<UserRecord> = persistence
        .find_users_by_emails(&strings(&["ALICE@co.com", "nobody@co.com"]))
        .unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "alice@co.com");
    assert_eq!(users[0].name, "Alice");
}

#[test]
fn test_batch_lookups_with_empty_keys_return_nothing() {
    let mut persistence: Persistence = seeded_persistence();

    assert!(persistence.find_users_by_emails(&[]).unwrap().is_empty());
    assert!(persistence.find_departments_by_ids(&[]).unwrap().is_empty());
    assert!(persistence.find_units_by_department_and_name(&[]).unwrap().is_empty());
}

#[test]
fn test_find_departments_by_code_name_and_id() {
    let mut persistence: Persistence = seeded_persistence();

    let by_code: Vec<DepartmentRecord> = persistence
        .find_departments_by_codes(&strings(&["OPS"]))
        .unwrap();
    let by_name: Vec<DepartmentRecord> = persistence
        .find_departments_by_names(&strings(&["Operations"]))
        .unwrap();
    let by_id: Vec<DepartmentRecord> = persistence
        .find_departments_by_ids(&[by_code[0].department_id])
        .unwrap();

    assert_eq!(by_code.len(), 1);
    assert_eq!(by_code, by_name);
    assert_eq!(by_code, by_id);
}

#[test]
fn test_find_units_by_name_spans_departments() {
    let mut persistence: Persistence = seeded_persistence();

    let units: Vec<UnitRecord> = persistence
        .find_units_by_names(&strings(&["Backend"]))
        .unwrap();

    assert_eq!(units.len(), 2);
    assert_ne!(units[0].department_id, units[1].department_id);
}

#[test]
fn test_find_units_by_department_and_name_matches_pairs_only() {
    let mut persistence: Persistence = seeded_persistence();
    let eng: i64 = department_id(&mut persistence, "ENG");
    let ops: i64 = department_id(&mut persistence, "OPS");

    let units: Vec<UnitRecord> = persistence
        .find_units_by_department_and_name(&[
            (eng, String::from("Backend")),
            (ops, String::from("Night Shift")),
            (eng, String::from("Night Shift")),
        ])
        .unwrap();

    let mut found: Vec<(i64, String)> = units
        .into_iter()
        .map(|unit| (unit.department_id, unit.name))
        .collect();
    found.sort();
    let mut expected: Vec<(i64, String)> = vec![
        (eng, String::from("Backend")),
        (ops, String::from("Night Shift")),
    ];
    expected.sort();
    assert_eq!(found, expected);
}

#[test]
fn test_list_functions_are_ordered() {
    let mut persistence: Persistence = seeded_persistence();
    let ops: i64 = department_id(&mut persistence, "OPS");

    let codes: Vec<String> = persistence
        .list_departments()
        .unwrap()
        .into_iter()
        .map(|department| department.code)
        .collect();
    let unit_names: Vec<String> = persistence
        .list_units(ops)
        .unwrap()
        .into_iter()
        .map(|unit| unit.name)
        .collect();
    let emails: Vec<String> = persistence
        .list_users()
        .unwrap()
        .into_iter()
        .map(|user| user.email)
        .collect();

    assert_eq!(codes, vec!["ENG", "OPS"]);
    assert_eq!(unit_names, vec!["Backend", "Night Shift"]);
    assert_eq!(emails, vec!["alice@co.com", "bob@co.com"]);
}
