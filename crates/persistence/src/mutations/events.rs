// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Event mutations.

use atrium_domain::NewEvent;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::{flag_value, format_stored_instant};
use crate::diesel_schema::{event_departments, event_units, event_users, events};
use crate::error::PersistenceError;

#[derive(Insertable)]
#[diesel(table_name = events)]
struct NewEventRow<'a> {
    title: &'a str,
    description: Option<&'a str>,
    tags_json: String,
    link: Option<&'a str>,
    start_at: String,
    end_at: String,
    end_time: Option<&'a str>,
    is_all_day: i32,
    is_global: i32,
    created_by: &'a str,
    created_at: &'a str,
    updated_at: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = event_users)]
struct NewEventUser {
    event_id: i64,
    user_id: i64,
    position: i64,
}

#[derive(Insertable)]
#[diesel(table_name = event_departments)]
struct NewEventDepartment {
    event_id: i64,
    department_id: i64,
    position: i64,
}

#[derive(Insertable)]
#[diesel(table_name = event_units)]
struct NewEventUnit {
    event_id: i64,
    unit_id: i64,
    position: i64,
}

/// Inserts an event and its relation rows in one transaction.
///
/// Relation rows keep the order of the ID lists they were built from.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `event` - The validated event
///
/// # Returns
///
/// The new event's ID.
///
/// # Errors
///
/// Returns an error if any insert fails; nothing is written in that case.
/// A `ForeignKeyViolation` means a related ID does not exist.
pub fn create_event(conn: &mut SqliteConnection, event: &NewEvent) -> Result<i64, PersistenceError> {
    let now: String = format_stored_instant(Utc::now());
    let row: NewEventRow<'_> = NewEventRow {
        title: &event.title,
        description: event.description.as_deref(),
        tags_json: serde_json::to_string(&event.tags)?,
        link: event.link.as_deref(),
        start_at: format_stored_instant(event.timing.start),
        end_at: format_stored_instant(event.timing.end),
        end_time: event.timing.end_time.as_deref(),
        is_all_day: flag_value(event.timing.is_all_day),
        is_global: flag_value(event.is_global),
        created_by: &event.created_by,
        created_at: &now,
        updated_at: &now,
    };

    let event_id: i64 = conn.transaction::<i64, PersistenceError, _>(|conn| {
        diesel::insert_into(events::table).values(&row).execute(conn)?;
        let event_id: i64 = get_last_insert_rowid(conn)?;

        let user_rows: Vec<NewEventUser> = (0_i64..)
            .zip(&event.user_ids)
            .map(|(position, &user_id)| NewEventUser {
                event_id,
                user_id,
                position,
            })
            .collect();
        if !user_rows.is_empty() {
            diesel::insert_into(event_users::table)
                .values(&user_rows)
                .execute(conn)?;
        }

        let department_rows: Vec<NewEventDepartment> = (0_i64..)
            .zip(&event.department_ids)
            .map(|(position, &department_id)| NewEventDepartment {
                event_id,
                department_id,
                position,
            })
            .collect();
        if !department_rows.is_empty() {
            diesel::insert_into(event_departments::table)
                .values(&department_rows)
                .execute(conn)?;
        }

        let unit_rows: Vec<NewEventUnit> = (0_i64..)
            .zip(&event.unit_ids)
            .map(|(position, &unit_id)| NewEventUnit {
                event_id,
                unit_id,
                position,
            })
            .collect();
        if !unit_rows.is_empty() {
            diesel::insert_into(event_units::table)
                .values(&unit_rows)
                .execute(conn)?;
        }

        Ok(event_id)
    })?;

    info!(
        event_id,
        users = event.user_ids.len(),
        departments = event.department_ids.len(),
        units = event.unit_ids.len(),
        "Created event"
    );
    Ok(event_id)
}
