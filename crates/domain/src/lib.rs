// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod event_time;
pub mod identifier;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use event_time::{
    ALL_DAY_END_TIME, EndSpec, MAX_EVENT_HOURS, derive_end, derive_timing,
    format_display_end_time, parse_instant, parse_time_of_day, parse_timezone,
};
pub use identifier::{
    DepartmentReference, UnitReference, UserReference, classify_department_input,
    classify_unit_input, classify_user_input, looks_like_internal_id, normalize_inputs,
    parse_internal_id,
};

// Re-export public types
pub use types::{
    DepartmentRecord, DepartmentRef, Event, EventRange, EventTiming, NewEvent, UnitRecord,
    UserRecord, normalize_email,
};
pub use validation::{
    MAX_DESCRIPTION_CHARS, MAX_REFERENCES, MAX_TAG_CHARS, MAX_TAGS, MAX_TITLE_CHARS,
    normalize_description, normalize_tags, validate_link, validate_reference_count,
    validate_title,
};

// Time zone type used for the scheduling zone.
pub use chrono_tz::Tz;
