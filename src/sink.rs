//! Alert sinks for high-severity events
//!
//! Appends with severity `error` or `critical` are forwarded to a pluggable
//! sink so an operator surface can react immediately. The sink is invoked
//! synchronously, best-effort, after the event is already stored; nothing a
//! sink does can fail the append.

use crate::types::{AuditEvent, AuditSeverity};

/// Observer for high-severity audit events
///
/// Implementations must not block for long: the recorder calls `alert` on
/// the caller's thread. The recorder ignores whatever the sink does with
/// the event.
pub trait AlertSink: Send + Sync {
    fn alert(&self, event: &AuditEvent);
}

/// Sink that forwards alerts to the `tracing` pipeline
///
/// Critical events are emitted at error level, error events at warn level,
/// so an operator console subscribed to the host's tracing output sees them
/// without extra wiring.
#[derive(Debug, Default)]
pub struct TracingSink;

impl AlertSink for TracingSink {
    fn alert(&self, event: &AuditEvent) {
        if event.severity >= AuditSeverity::Critical {
            tracing::error!(
                id = event.id,
                event_type = %event.event_type,
                actor = event.actor_name(),
                action = %event.action,
                resource = %event.resource,
                "critical audit event"
            );
        } else {
            tracing::warn!(
                id = event.id,
                event_type = %event.event_type,
                actor = event.actor_name(),
                action = %event.action,
                resource = %event.resource,
                "audit event"
            );
        }
    }
}

/// Sink that discards every alert
///
/// For embedders that consume alerts through queries instead of a live
/// observer.
#[derive(Debug, Default)]
pub struct NullSink;

impl AlertSink for NullSink {
    fn alert(&self, _event: &AuditEvent) {}
}
