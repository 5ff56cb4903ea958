// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user as known to the directory.
///
/// Emails are stored lowercase; lookups by email are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserRecord {
    /// The canonical numeric identifier assigned by the database.
    pub user_id: i64,
    /// The user's email address (lowercase).
    pub email: String,
    /// The user's display name.
    pub name: String,
}

impl UserRecord {
    /// Creates a new `UserRecord`, normalizing the email to lowercase.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The canonical numeric identifier
    /// * `email` - The email address
    /// * `name` - The display name
    #[must_use]
    pub fn new(user_id: i64, email: &str, name: &str) -> Self {
        Self {
            user_id,
            email: normalize_email(email),
            name: name.to_string(),
        }
    }
}

/// A department as known to the directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DepartmentRecord {
    /// The canonical numeric identifier assigned by the database.
    pub department_id: i64,
    /// The department code (unique, e.g. "ENG").
    pub code: String,
    /// The department name.
    pub name: String,
}

impl DepartmentRecord {
    /// Creates a new `DepartmentRecord`.
    #[must_use]
    pub fn new(department_id: i64, code: &str, name: &str) -> Self {
        Self {
            department_id,
            code: code.to_string(),
            name: name.to_string(),
        }
    }

    /// Returns the `(id, code)` reference used to disambiguate unit combos.
    #[must_use]
    pub fn to_ref(&self) -> DepartmentRef {
        DepartmentRef {
            department_id: self.department_id,
            code: self.code.clone(),
        }
    }
}

/// The minimal department reference carried from department resolution
/// into unit resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DepartmentRef {
    /// The canonical department identifier.
    pub department_id: i64,
    /// The department code.
    pub code: String,
}

/// A unit (sub-division of a department) as known to the directory.
///
/// Unit names are unique only within their department.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitRecord {
    /// The canonical numeric identifier assigned by the database.
    pub unit_id: i64,
    /// The owning department.
    pub department_id: i64,
    /// The unit name.
    pub name: String,
}

impl UnitRecord {
    /// Creates a new `UnitRecord`.
    #[must_use]
    pub fn new(unit_id: i64, department_id: i64, name: &str) -> Self {
        Self {
            unit_id,
            department_id,
            name: name.to_string(),
        }
    }
}

/// The derived timing of an event.
///
/// Instants are always UTC. `end_time` is the wall-clock display end time
/// in the scheduling zone, present only when it is meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTiming {
    /// The start instant.
    pub start: DateTime<Utc>,
    /// The end instant.
    pub end: DateTime<Utc>,
    /// The `HH:mm` display end time.
    pub end_time: Option<String>,
    /// Whether the event spans a whole day.
    pub is_all_day: bool,
}

/// An event that has passed validation, time derivation and participant
/// resolution, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    /// The event title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Normalized, deduplicated tags.
    pub tags: Vec<String>,
    /// Optional link.
    pub link: Option<String>,
    /// The derived timing.
    pub timing: EventTiming,
    /// Whether the event is visible to everyone.
    pub is_global: bool,
    /// Resolved user identifiers, in resolution order.
    pub user_ids: Vec<i64>,
    /// Resolved department identifiers, in resolution order.
    pub department_ids: Vec<i64>,
    /// Resolved unit identifiers, in resolution order.
    pub unit_ids: Vec<i64>,
    /// The identifier of the creator.
    pub created_by: String,
}

/// A persisted event with its related records expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// The canonical numeric identifier assigned by the database.
    pub event_id: i64,
    /// The event title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Tags.
    pub tags: Vec<String>,
    /// Optional link.
    pub link: Option<String>,
    /// The event timing.
    pub timing: EventTiming,
    /// Whether the event is visible to everyone.
    pub is_global: bool,
    /// Related users, in relation order.
    pub users: Vec<UserRecord>,
    /// Related departments, in relation order.
    pub departments: Vec<DepartmentRecord>,
    /// Related units, in relation order.
    pub units: Vec<UnitRecord>,
    /// The identifier of the creator.
    pub created_by: String,
    /// When the event was created.
    pub created_at: DateTime<Utc>,
    /// When the event was last updated.
    pub updated_at: DateTime<Utc>,
}

/// An optional time window used when listing events.
///
/// An event is inside the window when it overlaps it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventRange {
    /// Lower bound (exclusive on the event end).
    pub from: Option<DateTime<Utc>>,
    /// Upper bound (exclusive on the event start).
    pub to: Option<DateTime<Utc>>,
}

/// Normalizes an email address for storage and comparison.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
