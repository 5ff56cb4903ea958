// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use atrium::CoreError;
use atrium_domain::DomainError;
use std::collections::BTreeMap;
use tracing::error;

/// Field name to the messages reported for it.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// One or more request fields are invalid.
    Validation {
        /// Messages per request field.
        details: FieldErrors,
    },
    /// The event's start/end combination breaks a timing rule.
    InvalidEventTime {
        /// A human-readable description of the violation.
        message: String,
    },
    /// Some participant references matched nothing.
    UnresolvedReferences {
        /// User inputs with no match.
        missing_users: Vec<String>,
        /// Department inputs with no match.
        missing_departments: Vec<String>,
        /// Unit inputs with no match.
        missing_units: Vec<String>,
    },
    /// A requested resource was not found.
    NotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description safe to return to clients.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { .. } => write!(f, "Validation error"),
            Self::InvalidEventTime { message } | Self::Internal { message } => {
                write!(f, "{message}")
            }
            Self::UnresolvedReferences { .. } => write!(f, "Unable to resolve related records"),
            Self::NotFound { resource_type, .. } => write!(f, "{resource_type} not found"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Builds a validation error for a single field.
    #[must_use]
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        let mut details: FieldErrors = FieldErrors::new();
        details.insert(field.to_string(), vec![message.into()]);
        Self::Validation { details }
    }
}

/// Translates a domain error into an API error.
///
/// Timing rule violations keep their message; field-level failures become
/// validation details keyed by the request field they came from.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::InvalidDate { .. }
        | DomainError::EndBeforeStart
        | DomainError::CrossesDayBoundary
        | DomainError::DurationTooLong
        | DomainError::EndTimeRequired => ApiError::InvalidEventTime { message },
        DomainError::InvalidTitle(_) => ApiError::invalid_field("title", message),
        DomainError::InvalidDescription(_) => ApiError::invalid_field("description", message),
        DomainError::InvalidTag(_) => ApiError::invalid_field("tags", message),
        DomainError::InvalidLink(_) => ApiError::invalid_field("link", message),
        DomainError::InvalidTimeOfDay(_) => ApiError::invalid_field("endTime", message),
        DomainError::TooManyReferences { field, .. } => ApiError::invalid_field(&field, message),
        DomainError::InvalidTimezone(_) => ApiError::Internal { message },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::UnresolvedReferences {
            missing_users,
            missing_departments,
            missing_units,
        } => ApiError::UnresolvedReferences {
            missing_users,
            missing_departments,
            missing_units,
        },
        CoreError::Lookup(err) => {
            error!(error = %err, "Participant lookup failed");
            ApiError::Internal {
                message: String::from("Failed to resolve related records"),
            }
        }
    }
}
