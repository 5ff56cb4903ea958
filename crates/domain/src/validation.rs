// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use std::collections::HashSet;
use url::Url;

/// Maximum title length, in characters.
pub const MAX_TITLE_CHARS: usize = 200;
/// Maximum description length, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 5000;
/// Maximum length of a single tag, in characters.
pub const MAX_TAG_CHARS: usize = 50;
/// Maximum number of tags on an event.
pub const MAX_TAGS: usize = 20;
/// Maximum number of entries in one reference list.
pub const MAX_REFERENCES: usize = 200;

/// Validates and normalizes an event title.
///
/// # Arguments
///
/// * `title` - The raw title
///
/// # Returns
///
/// The trimmed title.
///
/// # Errors
///
/// Returns an error if the trimmed title is empty or longer than
/// `MAX_TITLE_CHARS` characters.
pub fn validate_title(title: &str) -> Result<String, DomainError> {
    let trimmed: &str = title.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidTitle(String::from(
            "Title cannot be empty",
        )));
    }
    if trimmed.chars().count() > MAX_TITLE_CHARS {
        return Err(DomainError::InvalidTitle(format!(
            "Title must be at most {MAX_TITLE_CHARS} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Normalizes an optional event description.
///
/// A missing or blank description becomes `None`. Non-blank descriptions
/// are kept as supplied.
///
/// # Errors
///
/// Returns an error if the description is longer than
/// `MAX_DESCRIPTION_CHARS` characters.
pub fn normalize_description(description: Option<&str>) -> Result<Option<String>, DomainError> {
    let Some(value) = description.filter(|d| !d.trim().is_empty()) else {
        return Ok(None);
    };
    if value.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(DomainError::InvalidDescription(format!(
            "Description must be at most {MAX_DESCRIPTION_CHARS} characters"
        )));
    }
    Ok(Some(value.to_string()))
}

/// Normalizes a list of tags.
///
/// Tags are trimmed, empty tags dropped, and duplicates removed keeping the
/// first occurrence.
///
/// # Errors
///
/// Returns an error if any tag is longer than `MAX_TAG_CHARS` characters,
/// or if more than `MAX_TAGS` distinct tags remain.
pub fn normalize_tags(tags: &[String]) -> Result<Vec<String>, DomainError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut normalized: Vec<String> = Vec::new();

    for tag in tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
        if tag.chars().count() > MAX_TAG_CHARS {
            return Err(DomainError::InvalidTag(format!(
                "Tag '{tag}' must be at most {MAX_TAG_CHARS} characters"
            )));
        }
        if seen.insert(tag) {
            normalized.push(tag.to_string());
        }
    }

    if normalized.len() > MAX_TAGS {
        return Err(DomainError::InvalidTag(format!(
            "At most {MAX_TAGS} tags are allowed"
        )));
    }
    Ok(normalized)
}

/// Validates an optional event link.
///
/// A missing or blank link becomes `None`.
///
/// # Errors
///
/// Returns an error unless the link parses as an absolute `http` or `https`
/// URL.
pub fn validate_link(link: Option<&str>) -> Result<Option<String>, DomainError> {
    let Some(value) = link.map(str::trim).filter(|l| !l.is_empty()) else {
        return Ok(None);
    };
    let parsed: Url =
        Url::parse(value).map_err(|e| DomainError::InvalidLink(format!("'{value}': {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(Some(value.to_string())),
        other => Err(DomainError::InvalidLink(format!(
            "Unsupported scheme '{other}': expected http or https"
        ))),
    }
}

/// Validates the size of one reference list.
///
/// # Errors
///
/// Returns `DomainError::TooManyReferences` if the list holds more than
/// `MAX_REFERENCES` entries.
pub fn validate_reference_count(field: &str, references: &[String]) -> Result<(), DomainError> {
    if references.len() > MAX_REFERENCES {
        return Err(DomainError::TooManyReferences {
            field: field.to_string(),
            count: references.len(),
            max: MAX_REFERENCES,
        });
    }
    Ok(())
}
