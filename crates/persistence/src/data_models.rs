// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;

/// Serializable representation of an Actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorData {
    pub id: String,
    pub actor_type: String,
}

/// Serializable representation of a Cause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CauseData {
    pub id: String,
    pub description: String,
}

/// Serializable representation of an Action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionData {
    pub name: String,
    pub details: Option<String>,
}

/// Counts of directory rows inserted by a seed.
///
/// Rows that already existed are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub departments: usize,
    pub units: usize,
    pub users: usize,
}

/// Formats an instant for storage.
///
/// Every stored instant uses the same width, so textual comparison in SQL
/// matches chronological comparison.
#[must_use]
pub fn format_stored_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses an instant written by `format_stored_instant`.
///
/// # Errors
///
/// Returns an error if the stored value is not an RFC 3339 instant.
pub fn parse_stored_instant(value: &str) -> Result<DateTime<Utc>, PersistenceError> {
    DateTime::parse_from_rfc3339(value)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|e| PersistenceError::ReconstructionError(format!("Invalid instant '{value}': {e}")))
}

/// Converts a stored 0/1 integer flag.
#[must_use]
pub const fn flag(value: i32) -> bool {
    value != 0
}

/// Converts a flag to its stored integer form.
#[must_use]
pub fn flag_value(value: bool) -> i32 {
    i32::from(value)
}
