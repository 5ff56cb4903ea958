// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Event operations.
//!
//! `create_event` runs in a fixed order: validate, derive timing, resolve
//! participants, write, then record the audit event. Nothing is written
//! unless the first three steps succeed, and the audit step never fails the
//! request.

use atrium::{
    DirectoryLookup, EventStore, ParticipantRequest, ResolvedParticipants, resolve_participants,
};
use atrium_audit::{Action, Actor, AuditEvent, AuditSink, Cause, Subject, notify_best_effort};
use atrium_domain::{
    EndSpec, Event, EventRange, EventTiming, NewEvent, derive_timing, parse_instant,
};
use tracing::{error, info};

use crate::error::{ApiError, FieldErrors, translate_core_error, translate_domain_error};
use crate::policy::EventPolicy;
use crate::request_response::{
    CreateEventRequest, CreateEventResponse, EventResponse, ListEventsQuery,
};
use crate::validation::{ValidatedEventFields, validate_create_event};

/// Audit action name for event creation.
pub const CREATE_EVENT_ACTION: &str = "CreateEvent";
/// Audit subject kind for events.
pub const EVENT_SUBJECT_KIND: &str = "event";

/// Creates an event.
///
/// # Arguments
///
/// * `lookup` - The directory used to resolve participants
/// * `store` - The event store
/// * `audit` - The audit sink, written best-effort
/// * `policy` - The scheduling policy
/// * `request` - The create request
/// * `actor` - The actor creating the event
/// * `cause` - The cause recorded with the audit event
///
/// # Returns
///
/// The created event with its relations expanded.
///
/// # Errors
///
/// Returns an error if:
/// - A request field is invalid (`Validation`)
/// - The timing rules are violated (`InvalidEventTime`)
/// - A participant reference matches nothing (`UnresolvedReferences`)
/// - The directory or store fails (`Internal`)
pub async fn create_event(
    lookup: &dyn DirectoryLookup,
    store: &dyn EventStore,
    audit: &dyn AuditSink,
    policy: &EventPolicy,
    request: CreateEventRequest,
    actor: &Actor,
    cause: Cause,
) -> Result<CreateEventResponse, ApiError> {
    info!(
        actor = %actor.id,
        users = request.user_ids.len(),
        departments = request.department_ids.len(),
        units = request.unit_ids.len(),
        "Creating event"
    );

    let fields: ValidatedEventFields = validate_create_event(&request)?;

    let timing: EventTiming = derive_timing(
        &request.start_date_time,
        &EndSpec {
            end_time_of_day: request.end_time.as_deref(),
            explicit_end: request.end_date_time.as_deref(),
            is_all_day: request.is_all_day,
        },
        policy.zone(),
    )
    .map_err(translate_domain_error)?;

    let participants: ResolvedParticipants = resolve_participants(
        lookup,
        &ParticipantRequest {
            users: &request.user_ids,
            departments: &request.department_ids,
            units: &request.unit_ids,
        },
    )
    .await
    .map_err(translate_core_error)?;

    let new_event: NewEvent = NewEvent {
        title: fields.title,
        description: fields.description,
        tags: fields.tags,
        link: fields.link,
        timing,
        is_global: request.is_global,
        user_ids: participants.user_ids,
        department_ids: participants.department_ids,
        unit_ids: participants.unit_ids,
        created_by: actor.id.clone(),
    };

    let event: Event = store.create_event(&new_event).await.map_err(|e| {
        error!(error = %e, "Failed to create event");
        ApiError::Internal {
            message: String::from("Failed to create event"),
        }
    })?;

    info!(event_id = event.event_id, title = %event.title, "Event created");

    let audit_event: AuditEvent = AuditEvent::new(
        actor.clone(),
        cause,
        Action::new(
            String::from(CREATE_EVENT_ACTION),
            Some(event.title.clone()),
        ),
        Subject::new(
            String::from(EVENT_SUBJECT_KIND),
            event.event_id.to_string(),
        ),
    );
    notify_best_effort(audit, &audit_event).await;

    Ok(CreateEventResponse {
        event: EventResponse::from(event),
        message: String::from("Event created successfully"),
    })
}

/// Retrieves one event.
///
/// # Errors
///
/// Returns `NotFound` if the event does not exist, or `Internal` if the
/// store fails.
pub async fn get_event(store: &dyn EventStore, event_id: i64) -> Result<EventResponse, ApiError> {
    let event: Option<Event> = store.get_event(event_id).await.map_err(|e| {
        error!(error = %e, event_id, "Failed to load event");
        ApiError::Internal {
            message: String::from("Failed to load event"),
        }
    })?;

    event.map(EventResponse::from).ok_or_else(|| ApiError::NotFound {
        resource_type: String::from("Event"),
        message: format!("Event {event_id} does not exist"),
    })
}

/// Lists events, optionally restricted to those overlapping a range.
///
/// Offset-less bounds are read as wall-clock times in the scheduling zone.
///
/// # Errors
///
/// Returns `Validation` if a bound cannot be parsed, or `Internal` if the
/// store fails.
pub async fn list_events(
    store: &dyn EventStore,
    policy: &EventPolicy,
    query: &ListEventsQuery,
) -> Result<Vec<EventResponse>, ApiError> {
    let mut details: FieldErrors = FieldErrors::new();
    let mut range: EventRange = EventRange::default();

    for (field, raw, bound) in [
        ("from", query.from.as_deref(), &mut range.from),
        ("to", query.to.as_deref(), &mut range.to),
    ] {
        let Some(raw) = raw.filter(|v| !v.trim().is_empty()) else {
            continue;
        };
        match parse_instant(field, raw, policy.zone()) {
            Ok(instant) => *bound = Some(instant),
            Err(err) => details.entry(field.to_string()).or_default().push(err.to_string()),
        }
    }
    if !details.is_empty() {
        return Err(ApiError::Validation { details });
    }

    let events: Vec<Event> = store.list_events(&range).await.map_err(|e| {
        error!(error = %e, "Failed to list events");
        ApiError::Internal {
            message: String::from("Failed to list events"),
        }
    })?;

    Ok(events.into_iter().map(EventResponse::from).collect())
}
