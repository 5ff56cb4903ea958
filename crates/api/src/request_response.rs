// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Field names follow the JSON contract (camelCase). Instants are rendered
//! as RFC 3339 UTC with second precision.

use atrium_domain::{DepartmentRecord, Event, UnitRecord, UserRecord};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// API request to create an event.
///
/// Missing strings and lists deserialize to empty values so that absent
/// required fields surface as validation errors rather than parse errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    /// The event title.
    #[serde(default)]
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Free-text tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Optional link (http or https).
    pub link: Option<String>,
    /// The start instant.
    #[serde(default)]
    pub start_date_time: String,
    /// Optional explicit end instant.
    pub end_date_time: Option<String>,
    /// Optional `HH:mm` end time on the start date.
    pub end_time: Option<String>,
    /// Whether the event lasts all day.
    #[serde(default)]
    pub is_all_day: bool,
    /// Whether the event is visible to everyone.
    #[serde(default)]
    pub is_global: bool,
    /// User references (emails or IDs).
    #[serde(default)]
    pub user_ids: Vec<String>,
    /// Department references (codes, names or IDs).
    #[serde(default)]
    pub department_ids: Vec<String>,
    /// Unit references (IDs, names or `CODE:Unit` combos).
    #[serde(default)]
    pub unit_ids: Vec<String>,
}

/// Query parameters for listing events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEventsQuery {
    /// Only events ending after this instant.
    pub from: Option<String>,
    /// Only events starting before this instant.
    pub to: Option<String>,
}

/// A related user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub email: String,
    pub name: String,
}

/// A related department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSummary {
    pub id: i64,
    pub code: String,
    pub name: String,
}

/// A related unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitSummary {
    pub id: i64,
    pub department_id: i64,
    pub name: String,
}

/// An event as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub link: Option<String>,
    pub start_date_time: String,
    pub end_date_time: String,
    pub end_time: Option<String>,
    pub is_all_day: bool,
    pub is_global: bool,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
    pub users: Vec<UserSummary>,
    pub departments: Vec<DepartmentSummary>,
    pub units: Vec<UnitSummary>,
}

/// API response for a successful event creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEventResponse {
    /// The created event with its relations expanded.
    pub event: EventResponse,
    /// A success message.
    pub message: String,
}

/// Formats an instant for clients.
#[must_use]
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl From<UserRecord> for UserSummary {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.user_id,
            email: user.email,
            name: user.name,
        }
    }
}

impl From<DepartmentRecord> for DepartmentSummary {
    fn from(department: DepartmentRecord) -> Self {
        Self {
            id: department.department_id,
            code: department.code,
            name: department.name,
        }
    }
}

impl From<UnitRecord> for UnitSummary {
    fn from(unit: UnitRecord) -> Self {
        Self {
            id: unit.unit_id,
            department_id: unit.department_id,
            name: unit.name,
        }
    }
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.event_id,
            title: event.title,
            description: event.description,
            tags: event.tags,
            link: event.link,
            start_date_time: format_instant(event.timing.start),
            end_date_time: format_instant(event.timing.end),
            end_time: event.timing.end_time,
            is_all_day: event.timing.is_all_day,
            is_global: event.is_global,
            created_by: event.created_by,
            created_at: format_instant(event.created_at),
            updated_at: format_instant(event.updated_at),
            users: event.users.into_iter().map(UserSummary::from).collect(),
            departments: event
                .departments
                .into_iter()
                .map(DepartmentSummary::from)
                .collect(),
            units: event.units.into_iter().map(UnitSummary::from).collect(),
        }
    }
}
