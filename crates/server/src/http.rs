// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON envelopes and HTTP error mapping.

use atrium_api::{ApiError, FieldErrors};
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::warn;

/// Successful response envelope.
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub ok: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> SuccessResponse<T> {
    pub const fn new(data: T) -> Self {
        Self {
            ok: true,
            data,
            message: None,
        }
    }

    pub fn with_message(data: T, message: String) -> Self {
        Self {
            ok: true,
            data,
            message: Some(message),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Per-category unresolved inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingReferences {
    pub missing_users: Vec<String>,
    pub missing_departments: Vec<String>,
    pub missing_units: Vec<String>,
}

/// The `details` member of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorDetails {
    Fields(FieldErrors),
    Missing(MissingReferences),
}

/// Error response envelope.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    ok: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<ErrorDetails>,
}

/// An error ready to be sent to the client.
#[derive(Debug)]
pub struct HttpError {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error message.
    pub error: String,
    /// Structured details, if any.
    pub details: Option<ErrorDetails>,
}

impl HttpError {
    fn validation(field: &str, message: String) -> Self {
        let mut details: FieldErrors = FieldErrors::new();
        details.insert(field.to_string(), vec![message]);
        Self {
            status: StatusCode::BAD_REQUEST,
            error: String::from("Validation error"),
            details: Some(ErrorDetails::Fields(details)),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            ok: false,
            error: self.error,
            details: self.details,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let error: String = err.to_string();
        match err {
            ApiError::Validation { details } => Self {
                status: StatusCode::BAD_REQUEST,
                error,
                details: Some(ErrorDetails::Fields(details)),
            },
            ApiError::InvalidEventTime { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                error,
                details: None,
            },
            ApiError::UnresolvedReferences {
                missing_users,
                missing_departments,
                missing_units,
            } => Self {
                status: StatusCode::BAD_REQUEST,
                error,
                details: Some(ErrorDetails::Missing(MissingReferences {
                    missing_users,
                    missing_departments,
                    missing_units,
                })),
            },
            ApiError::NotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                error,
                details: None,
            },
            ApiError::Internal { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error,
                details: None,
            },
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "Rejected request body");
        Self::validation("body", rejection.body_text())
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        Self::validation("eventId", rejection.body_text())
    }
}
