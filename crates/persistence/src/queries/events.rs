// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Event queries.
//!
//! Events are returned with their related users, departments and units
//! expanded, each list in the order it was written.

use atrium_domain::{
    DepartmentRecord, Event, EventRange, EventTiming, UnitRecord, UserRecord,
};
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::{flag, format_stored_instant, parse_stored_instant};
use crate::diesel_schema::{
    departments, event_departments, event_units, event_users, events, units, users,
};
use crate::error::PersistenceError;
use crate::queries::directory::{DepartmentRow, UnitRow, UserRow};

/// Diesel Queryable struct for event rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = events)]
struct EventRow {
    event_id: i64,
    title: String,
    description: Option<String>,
    tags_json: String,
    link: Option<String>,
    start_at: String,
    end_at: String,
    end_time: Option<String>,
    is_all_day: i32,
    is_global: i32,
    created_by: String,
    created_at: String,
    updated_at: String,
}

/// Retrieves one event with its relations.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `event_id` - The event ID
///
/// # Errors
///
/// Returns an error if the database query fails or a stored value cannot
/// be reconstructed. Returns `Ok(None)` if the event does not exist.
pub fn get_event(
    conn: &mut SqliteConnection,
    event_id: i64,
) -> Result<Option<Event>, PersistenceError> {
    debug!(event_id, "Loading event");

    let row: Option<EventRow> = events::table
        .filter(events::event_id.eq(event_id))
        .select(EventRow::as_select())
        .first(conn)
        .optional()?;

    row.map(|row| expand_event(conn, row)).transpose()
}

/// Lists events overlapping a range, ordered by start then ID.
///
/// An event overlaps the range when it ends after `from` and starts before
/// `to`; a missing bound does not restrict.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored value cannot
/// be reconstructed.
pub fn list_events(
    conn: &mut SqliteConnection,
    range: &EventRange,
) -> Result<Vec<Event>, PersistenceError> {
    let mut query = events::table
        .select(EventRow::as_select())
        .order((events::start_at.asc(), events::event_id.asc()))
        .into_boxed::<Sqlite>();
    if let Some(from) = range.from {
        query = query.filter(events::end_at.gt(format_stored_instant(from)));
    }
    if let Some(to) = range.to {
        query = query.filter(events::start_at.lt(format_stored_instant(to)));
    }

    let rows: Vec<EventRow> = query.load(conn)?;
    debug!(count = rows.len(), "Listed events");

    rows.into_iter().map(|row| expand_event(conn, row)).collect()
}

fn expand_event(conn: &mut SqliteConnection, row: EventRow) -> Result<Event, PersistenceError> {
    let event_id: i64 = row.event_id;

    let users: Vec<UserRecord> = event_users::table
        .inner_join(users::table)
        .filter(event_users::event_id.eq(event_id))
        .order(event_users::position.asc())
        .select(UserRow::as_select())
        .load(conn)?
        .into_iter()
        .map(UserRecord::from)
        .collect();

    let departments: Vec<DepartmentRecord> = event_departments::table
        .inner_join(departments::table)
        .filter(event_departments::event_id.eq(event_id))
        .order(event_departments::position.asc())
        .select(DepartmentRow::as_select())
        .load(conn)?
        .into_iter()
        .map(DepartmentRecord::from)
        .collect();

    let units: Vec<UnitRecord> = event_units::table
        .inner_join(units::table)
        .filter(event_units::event_id.eq(event_id))
        .order(event_units::position.asc())
        .select(UnitRow::as_select())
        .load(conn)?
        .into_iter()
        .map(UnitRecord::from)
        .collect();

    let tags: Vec<String> = serde_json::from_str(&row.tags_json)?;

    Ok(Event {
        event_id,
        title: row.title,
        description: row.description,
        tags,
        link: row.link,
        timing: EventTiming {
            start: parse_stored_instant(&row.start_at)?,
            end: parse_stored_instant(&row.end_at)?,
            end_time: row.end_time,
            is_all_day: flag(row.is_all_day),
        },
        is_global: flag(row.is_global),
        users,
        departments,
        units,
        created_by: row.created_by,
        created_at: parse_stored_instant(&row.created_at)?,
        updated_at: parse_stored_instant(&row.updated_at)?,
    })
}
