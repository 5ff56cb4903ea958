// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation and time derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A date/time string could not be parsed into an instant.
    InvalidDate {
        /// The field the value was supplied for.
        field: String,
        /// The rejected value.
        value: String,
    },
    /// An end-time-of-day string is not a valid `HH:mm` value.
    InvalidTimeOfDay(String),
    /// The derived or supplied end is not after the start.
    EndBeforeStart,
    /// The end falls on a different calendar day than the start.
    CrossesDayBoundary,
    /// The event lasts longer than 24 hours.
    DurationTooLong,
    /// Neither an end time, an end instant, nor the all-day flag was supplied.
    EndTimeRequired,
    /// The configured scheduling time zone is not a known IANA zone.
    InvalidTimezone(String),
    /// Event title is empty or invalid.
    InvalidTitle(String),
    /// Event description is invalid.
    InvalidDescription(String),
    /// A tag is invalid.
    InvalidTag(String),
    /// Event link is not a usable URL.
    InvalidLink(String),
    /// Too many references were supplied for one category.
    TooManyReferences {
        /// The request field carrying the references.
        field: String,
        /// The number of references supplied.
        count: usize,
        /// The maximum allowed.
        max: usize,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { field, value } => {
                write!(f, "Invalid date for '{field}': '{value}'")
            }
            Self::InvalidTimeOfDay(value) => {
                write!(f, "Invalid end time '{value}': expected HH:mm")
            }
            Self::EndBeforeStart => write!(f, "End time must be after start time"),
            Self::CrossesDayBoundary => {
                write!(f, "Event must end on the same day it starts")
            }
            Self::DurationTooLong => write!(f, "Event cannot last longer than 24 hours"),
            Self::EndTimeRequired => {
                write!(f, "End time is required unless the event is all day")
            }
            Self::InvalidTimezone(zone) => write!(f, "Unknown time zone: {zone}"),
            Self::InvalidTitle(msg) => write!(f, "Invalid title: {msg}"),
            Self::InvalidDescription(msg) => write!(f, "Invalid description: {msg}"),
            Self::InvalidTag(msg) => write!(f, "Invalid tag: {msg}"),
            Self::InvalidLink(msg) => write!(f, "Invalid link: {msg}"),
            Self::TooManyReferences { field, count, max } => {
                write!(
                    f,
                    "Too many entries in '{field}': {count} supplied, at most {max} allowed"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}

impl DomainError {
    /// Returns whether this error is a violation of the event timing rules.
    ///
    /// Timing violations are reported to clients as a bare message rather
    /// than as a field-level validation failure.
    #[must_use]
    pub const fn is_timing_violation(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate { .. }
                | Self::EndBeforeStart
                | Self::CrossesDayBoundary
                | Self::DurationTooLong
                | Self::EndTimeRequired
        )
    }
}
