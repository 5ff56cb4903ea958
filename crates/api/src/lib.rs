// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for Atrium.
//!
//! Translates client requests into domain operations and domain/core
//! failures into the API error contract. Transport concerns (HTTP status
//! codes, JSON envelopes) live in the server.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod policy;
mod request_response;
mod validation;

#[cfg(test)]
mod tests;

pub use error::{ApiError, FieldErrors, translate_core_error, translate_domain_error};
pub use handlers::{CREATE_EVENT_ACTION, EVENT_SUBJECT_KIND, create_event, get_event, list_events};
pub use policy::{ACTOR_HEADER, EventPolicy, actor_from_header};
pub use request_response::{
    CreateEventRequest, CreateEventResponse, DepartmentSummary, EventResponse, ListEventsQuery,
    UnitSummary, UserSummary, format_instant,
};
pub use validation::{ValidatedEventFields, validate_create_event};
