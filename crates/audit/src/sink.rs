// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::AuditEvent;

/// Errors reported by an audit sink.
#[derive(Debug, thiserror::Error)]
pub enum AuditSinkError {
    /// The sink could not store the event.
    #[error("audit sink unavailable: {0}")]
    Unavailable(String),
}

/// A destination for audit events.
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Records an audit event.
    ///
    /// # Errors
    ///
    /// Returns an error if the event could not be recorded.
    async fn record(&self, event: &AuditEvent) -> Result<(), AuditSinkError>;
}

/// Records an audit event, logging and swallowing any failure.
///
/// Audit recording runs after the primary write has committed; a failure
/// here never fails or rolls back that write.
///
/// # Returns
///
/// `true` if the event was recorded.
pub async fn notify_best_effort(sink: &dyn AuditSink, event: &AuditEvent) -> bool {
    match sink.record(event).await {
        Ok(()) => {
            debug!(
                action = %event.action.name,
                subject_kind = %event.subject.kind,
                subject_id = %event.subject.id,
                "Recorded audit event"
            );
            true
        }
        Err(e) => {
            warn!(
                action = %event.action.name,
                subject_kind = %event.subject.kind,
                subject_id = %event.subject.id,
                error = %e,
                "Failed to record audit event"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Actor, Cause, Subject};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<AuditEvent>>,
    }

    #[async_trait]
    impl AuditSink for RecordingSink {
        async fn record(&self, event: &AuditEvent) -> Result<(), AuditSinkError> {
            if let Ok(mut events) = self.events.lock() {
                events.push(event.clone());
            }
            Ok(())
        }
    }

    struct FailingSink;

    #[async_trait]
    impl AuditSink for FailingSink {
        async fn record(&self, _event: &AuditEvent) -> Result<(), AuditSinkError> {
            Err(AuditSinkError::Unavailable(String::from("disk full")))
        }
    }

    fn sample_event() -> AuditEvent {
        AuditEvent::new(
            Actor::system(),
            Cause::new(String::from("req-1"), String::from("API request")),
            Action::new(String::from("CreateEvent"), None),
            Subject::new(String::from("event"), String::from("1")),
        )
    }

    #[tokio::test]
    async fn test_notify_best_effort_records_event() {
        let sink: RecordingSink = RecordingSink::default();
        let event: AuditEvent = sample_event();

        assert!(notify_best_effort(&sink, &event).await);

        let events = sink.events.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        assert_eq!(events.as_slice(), &[event]);
    }

    #[tokio::test]
    async fn test_notify_best_effort_swallows_failure() {
        let sink: FailingSink = FailingSink;

        assert!(!notify_best_effort(&sink, &sample_event()).await);
    }

    #[test]
    fn test_audit_sink_error_display() {
        let err: AuditSinkError = AuditSinkError::Unavailable(String::from("disk full"));
        assert_eq!(format!("{err}"), "audit sink unavailable: disk full");
    }
}
