// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, MAX_REFERENCES, MAX_TAGS, normalize_description, normalize_tags, validate_link,
    validate_reference_count, validate_title,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

#[test]
fn test_validate_title_trims() {
    assert_eq!(validate_title("  Standup  ").unwrap(), "Standup");
}

#[test]
fn test_validate_title_rejects_blank() {
    let result: Result<String, DomainError> = validate_title("   ");
    assert!(matches!(result, Err(DomainError::InvalidTitle(_))));
}

#[test]
fn test_validate_title_rejects_long() {
    let title: String = "x".repeat(201);
    assert!(matches!(
        validate_title(&title),
        Err(DomainError::InvalidTitle(_))
    ));
    assert!(validate_title(&"x".repeat(200)).is_ok());
}

#[test]
fn test_validate_title_counts_characters_not_bytes() {
    let title: String = "é".repeat(200);
    assert!(validate_title(&title).is_ok());
}

#[test]
fn test_normalize_description() {
    assert_eq!(normalize_description(None).unwrap(), None);
    assert_eq!(normalize_description(Some("  \n ")).unwrap(), None);
    assert_eq!(
        normalize_description(Some("Quarterly review")).unwrap(),
        Some(String::from("Quarterly review"))
    );
    assert!(matches!(
        normalize_description(Some(&"d".repeat(5001))),
        Err(DomainError::InvalidDescription(_))
    ));
}

#[test]
fn test_normalize_tags_trims_and_dedupes() {
    let tags: Vec<String> = strings(&[" planning ", "", "ops", "planning", "  "]);
    assert_eq!(normalize_tags(&tags).unwrap(), strings(&["planning", "ops"]));
}

#[test]
fn test_normalize_tags_rejects_long_tag() {
    let tags: Vec<String> = vec!["t".repeat(51)];
    assert!(matches!(
        normalize_tags(&tags),
        Err(DomainError::InvalidTag(_))
    ));
}

#[test]
fn test_normalize_tags_limits_count_after_dedup() {
    let distinct: Vec<String> = (0..=MAX_TAGS).map(|i| format!("tag{i}")).collect();
    assert!(matches!(
        normalize_tags(&distinct),
        Err(DomainError::InvalidTag(_))
    ));

    let repeated: Vec<String> = vec![String::from("same"); MAX_TAGS + 5];
    assert_eq!(normalize_tags(&repeated).unwrap(), strings(&["same"]));
}

#[test]
fn test_validate_link() {
    assert_eq!(validate_link(None).unwrap(), None);
    assert_eq!(validate_link(Some(" ")).unwrap(), None);
    assert_eq!(
        validate_link(Some("https://meet.example.com/room")).unwrap(),
        Some(String::from("https://meet.example.com/room"))
    );
    assert!(matches!(
        validate_link(Some("meet.example.com")),
        Err(DomainError::InvalidLink(_))
    ));
    assert!(matches!(
        validate_link(Some("ftp://files.example.com")),
        Err(DomainError::InvalidLink(_))
    ));
}

#[test]
fn test_validate_reference_count() {
    let at_limit: Vec<String> = vec![String::from("1"); MAX_REFERENCES];
    assert!(validate_reference_count("userIds", &at_limit).is_ok());

    let over_limit: Vec<String> = vec![String::from("1"); MAX_REFERENCES + 1];
    assert_eq!(
        validate_reference_count("unitIds", &over_limit),
        Err(DomainError::TooManyReferences {
            field: String::from("unitIds"),
            count: MAX_REFERENCES + 1,
            max: MAX_REFERENCES,
        })
    );
}
