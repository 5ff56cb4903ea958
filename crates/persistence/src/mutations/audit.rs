// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit event persistence.

use atrium_audit::AuditEvent;
use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::{ActionData, ActorData, CauseData};
use crate::diesel_schema::audit_events;
use crate::error::PersistenceError;

/// Persists an audit event.
///
/// Actor, cause and action are stored as JSON documents; the subject is
/// stored as indexed columns.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `event` - The audit event to persist
///
/// # Returns
///
/// The new audit event's ID.
///
/// # Errors
///
/// Returns an error if serialization or the insert fails.
pub fn persist_audit_event(
    conn: &mut SqliteConnection,
    event: &AuditEvent,
) -> Result<i64, PersistenceError> {
    let actor_json: String = serde_json::to_string(&ActorData {
        id: event.actor.id.clone(),
        actor_type: event.actor.actor_type.clone(),
    })?;
    let cause_json: String = serde_json::to_string(&CauseData {
        id: event.cause.id.clone(),
        description: event.cause.description.clone(),
    })?;
    let action_json: String = serde_json::to_string(&ActionData {
        name: event.action.name.clone(),
        details: event.action.details.clone(),
    })?;

    diesel::insert_into(audit_events::table)
        .values((
            audit_events::actor_json.eq(&actor_json),
            audit_events::cause_json.eq(&cause_json),
            audit_events::action_json.eq(&action_json),
            audit_events::subject_kind.eq(&event.subject.kind),
            audit_events::subject_id.eq(&event.subject.id),
        ))
        .execute(conn)?;
    let audit_event_id: i64 = get_last_insert_rowid(conn)?;

    debug!(
        audit_event_id,
        action = %event.action.name,
        subject_kind = %event.subject.kind,
        subject_id = %event.subject.id,
        "Persisted audit event"
    );
    Ok(audit_event_id)
}
