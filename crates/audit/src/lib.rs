// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod sink;

pub use sink::{AuditSink, AuditSinkError, notify_best_effort};

/// Actor type used when no caller identity was supplied.
pub const SYSTEM_ACTOR_TYPE: &str = "system";

/// Actor type used for identified callers.
pub const USER_ACTOR_TYPE: &str = "user";

/// Represents the entity performing an action.
///
/// An actor is any identifiable entity that initiates a state change.
/// This could be a user or a system process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "user", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }

    /// Creates the system actor.
    #[must_use]
    pub fn system() -> Self {
        Self::new(
            String::from(SYSTEM_ACTOR_TYPE),
            String::from(SYSTEM_ACTOR_TYPE),
        )
    }
}

/// Represents the reason or trigger for an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., request ID).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this cause
    /// * `description` - A description of what triggered this action
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the specific action performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "`CreateEvent`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// The record an action was applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    /// The kind of record (e.g., "event").
    pub kind: String,
    /// The record identifier.
    pub id: String,
}

impl Subject {
    /// Creates a new Subject.
    #[must_use]
    pub const fn new(kind: String, id: String) -> Self {
        Self { kind, id }
    }
}

/// An immutable audit event describing a completed write.
///
/// Captures who performed the action (actor), why (cause), what was done
/// (action) and which record it was applied to (subject).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// The actor who initiated this change.
    pub actor: Actor,
    /// The cause or reason for this change.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The record that was changed.
    pub subject: Subject,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor who initiated the change
    /// * `cause` - The reason for the change
    /// * `action` - The action that was performed
    /// * `subject` - The record that was changed
    #[must_use]
    pub const fn new(actor: Actor, cause: Cause, action: Action, subject: Subject) -> Self {
        Self {
            actor,
            cause,
            action,
            subject,
        }
    }
}
