// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP routes.

use atrium_api::{
    ACTOR_HEADER, CreateEventRequest, CreateEventResponse, EventPolicy, EventResponse,
    ListEventsQuery, actor_from_header, create_event, get_event, list_events,
};
use atrium_audit::{Actor, Cause};
use atrium_persistence::SharedPersistence;
use axum::{
    Json, Router,
    extract::{
        Path, Query, State as AxumState,
        rejection::{JsonRejection, PathRejection},
    },
    http::HeaderMap,
    routing::get,
};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

use crate::http::{HealthResponse, HttpError, SuccessResponse};

/// Sequence for request cause IDs.
static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Directory, event store and audit sink.
    pub store: SharedPersistence,
    /// Scheduling rules.
    pub policy: EventPolicy,
}

fn request_actor(headers: &HeaderMap) -> Actor {
    actor_from_header(
        headers
            .get(ACTOR_HEADER)
            .and_then(|value| value.to_str().ok()),
    )
}

fn request_cause(description: &str) -> Cause {
    let request_id: u64 = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    Cause::new(format!("req-{request_id}"), description.to_string())
}

async fn handle_create_event(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse<EventResponse>>, HttpError> {
    let Json(request): Json<CreateEventRequest> = payload?;
    let actor: Actor = request_actor(&headers);
    let cause: Cause = request_cause("POST /events");
    info!(actor = %actor.id, cause = %cause.id, "Handling create_event request");

    let response: CreateEventResponse = create_event(
        &app_state.store,
        &app_state.store,
        &app_state.store,
        &app_state.policy,
        request,
        &actor,
        cause,
    )
    .await?;

    Ok(Json(SuccessResponse::with_message(
        response.event,
        response.message,
    )))
}

async fn handle_get_event(
    AxumState(app_state): AxumState<AppState>,
    event_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<SuccessResponse<EventResponse>>, HttpError> {
    let Path(event_id): Path<i64> = event_id?;
    info!(event_id, "Handling get_event request");

    let event: EventResponse = get_event(&app_state.store, event_id).await?;
    Ok(Json(SuccessResponse::new(event)))
}

async fn handle_list_events(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> Result<Json<SuccessResponse<Vec<EventResponse>>>, HttpError> {
    info!(from = ?query.from, to = ?query.to, "Handling list_events request");

    let events: Vec<EventResponse> =
        list_events(&app_state.store, &app_state.policy, &query).await?;
    Ok(Json(SuccessResponse::new(events)))
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// Builds the application router.
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/events", get(handle_list_events).post(handle_create_event))
        .route("/events/{event_id}", get(handle_get_event))
        .route("/health", get(handle_health))
        .with_state(app_state)
}
