// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit event queries.

use atrium_audit::{Action, Actor, AuditEvent, Cause, Subject};
use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::{ActionData, ActorData, CauseData};
use crate::diesel_schema::audit_events;
use crate::error::PersistenceError;

/// Diesel Queryable struct for audit event rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = audit_events)]
struct AuditEventRow {
    actor_json: String,
    cause_json: String,
    action_json: String,
    subject_kind: String,
    subject_id: String,
}

/// Lists the audit events recorded for one subject, oldest first.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `subject_kind` - The kind of record (e.g., "event")
/// * `subject_id` - The record identifier
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be deserialized.
pub fn list_audit_events_for_subject(
    conn: &mut SqliteConnection,
    subject_kind: &str,
    subject_id: &str,
) -> Result<Vec<AuditEvent>, PersistenceError> {
    let rows: Vec<AuditEventRow> = audit_events::table
        .filter(audit_events::subject_kind.eq(subject_kind))
        .filter(audit_events::subject_id.eq(subject_id))
        .order(audit_events::audit_event_id.asc())
        .select(AuditEventRow::as_select())
        .load(conn)?;

    rows.into_iter().map(audit_event_from_row).collect()
}

/// Counts all recorded audit events.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_audit_events(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(audit_events::table.count().get_result(conn)?)
}

fn audit_event_from_row(row: AuditEventRow) -> Result<AuditEvent, PersistenceError> {
    let actor_data: ActorData = serde_json::from_str(&row.actor_json)?;
    let cause_data: CauseData = serde_json::from_str(&row.cause_json)?;
    let action_data: ActionData = serde_json::from_str(&row.action_json)?;

    Ok(AuditEvent::new(
        Actor::new(actor_data.id, actor_data.actor_type),
        Cause::new(cause_data.id, cause_data.description),
        Action::new(action_data.name, action_data.details),
        Subject::new(row.subject_kind, row.subject_id),
    ))
}
