// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request validation.
//!
//! Every field is checked and all failures are reported together, keyed by
//! the request field name.

use atrium_domain::{
    DomainError, normalize_description, normalize_tags, parse_time_of_day, validate_link,
    validate_reference_count, validate_title,
};

use crate::error::{ApiError, FieldErrors};
use crate::request_response::CreateEventRequest;

/// The normalized descriptive fields of a create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEventFields {
    pub title: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub link: Option<String>,
}

fn record<T>(details: &mut FieldErrors, field: &str, result: Result<T, DomainError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            details
                .entry(field.to_string())
                .or_default()
                .push(err.to_string());
            None
        }
    }
}

/// Validates a create request.
///
/// Timing fields are only checked for shape here (presence of a start,
/// `HH:mm` format of an end time); the timing rules themselves are applied
/// when the end is derived.
///
/// # Errors
///
/// Returns `ApiError::Validation` with every failing field if any check
/// fails.
pub fn validate_create_event(
    request: &CreateEventRequest,
) -> Result<ValidatedEventFields, ApiError> {
    let mut details: FieldErrors = FieldErrors::new();

    let title: Option<String> = record(&mut details, "title", validate_title(&request.title));
    let description: Option<Option<String>> = record(
        &mut details,
        "description",
        normalize_description(request.description.as_deref()),
    );
    let tags: Option<Vec<String>> = record(&mut details, "tags", normalize_tags(&request.tags));
    let link: Option<Option<String>> =
        record(&mut details, "link", validate_link(request.link.as_deref()));

    if request.start_date_time.trim().is_empty() {
        details
            .entry(String::from("startDateTime"))
            .or_default()
            .push(String::from("Start date and time is required"));
    }
    if let Some(end_time) = request.end_time.as_deref().filter(|t| !t.trim().is_empty()) {
        record(&mut details, "endTime", parse_time_of_day(end_time.trim()));
    }

    for (field, references) in [
        ("userIds", &request.user_ids),
        ("departmentIds", &request.department_ids),
        ("unitIds", &request.unit_ids),
    ] {
        record(&mut details, field, validate_reference_count(field, references));
    }

    match (title, description, tags, link) {
        (Some(title), Some(description), Some(tags), Some(link)) if details.is_empty() => {
            Ok(ValidatedEventFields {
                title,
                description,
                tags,
                link,
            })
        }
        _ => Err(ApiError::Validation { details }),
    }
}
