//! Recording operations for the audit log
//!
//! The append path validates the input, assigns the next sequence id,
//! stamps the current UTC time, stores the event, and compacts the store
//! back under capacity. Storage pressure evicts; it never fails.

use chrono::{DateTime, Utc};

use crate::types::{
    Actor, AuditEvent, AuditEventType, AuditOutcome, AuditSeverity, EventInput, SourceContext,
};

use super::{compact, AuditError, AuditLog, AuditResult};

/// Record an event stamped with the current time
pub(super) fn record(log: &AuditLog, input: EventInput) -> AuditResult<u64> {
    append(log, input, Utc::now())
}

/// Append an event with an explicit timestamp
///
/// `record` is the only public entry and always stamps `Utc::now()`; the
/// explicit-timestamp form exists so tests can build aged stores.
pub(super) fn append(
    log: &AuditLog,
    input: EventInput,
    timestamp: DateTime<Utc>,
) -> AuditResult<u64> {
    validate(&input)?;

    let wants_alert = input.severity.is_alert();
    let mut alert_copy = None;

    let (id, evicted) = {
        let mut state = log.state.write();
        let id = state.last_id + 1;
        state.last_id = id;

        let event = AuditEvent::from_input(id, timestamp, input);
        if wants_alert {
            alert_copy = Some(event.clone());
        }
        state.events.push_back(event);

        let evicted = compact(&mut state, log.config.capacity, None);
        (id, evicted)
    };

    tracing::debug!(id, evicted, "recorded audit event");

    // Sink runs outside the lock; whatever it does cannot fail the append.
    if let Some(event) = alert_copy {
        log.sink.alert(&event);
    }

    Ok(id)
}

/// Reject inputs missing a required free-text field
///
/// `event_type`, `severity` and `outcome` are present by construction;
/// the empty string is the typed equivalent of an absent `action` or
/// `resource`.
fn validate(input: &EventInput) -> AuditResult<()> {
    if input.action.trim().is_empty() {
        return Err(AuditError::MissingField("action"));
    }
    if input.resource.trim().is_empty() {
        return Err(AuditError::MissingField("resource"));
    }
    Ok(())
}

/// Login attempt: event type and severity derive from the outcome
pub(super) fn record_login(
    log: &AuditLog,
    actor: Actor,
    outcome: AuditOutcome,
    source: Option<SourceContext>,
) -> AuditResult<u64> {
    let (event_type, severity) = match outcome {
        AuditOutcome::Success => (AuditEventType::LoginSuccess, AuditSeverity::Info),
        AuditOutcome::Failure => (AuditEventType::LoginFailure, AuditSeverity::Warning),
    };

    let mut input =
        EventInput::new(event_type, "login", "session", severity, outcome).with_actor(actor);
    if let Some(source) = source {
        input = input.with_source(source);
    }
    record(log, input)
}

/// Data access is always informational and successful
pub(super) fn record_data_access(
    log: &AuditLog,
    event_type: AuditEventType,
    actor: Actor,
    action: String,
    resource: String,
) -> AuditResult<u64> {
    record(
        log,
        EventInput::new(
            event_type,
            action,
            resource,
            AuditSeverity::Info,
            AuditOutcome::Success,
        )
        .with_actor(actor),
    )
}

/// Denied authorization check: warning, failure
pub(super) fn record_permission_denied(
    log: &AuditLog,
    actor: Actor,
    action: String,
    resource: String,
) -> AuditResult<u64> {
    record(
        log,
        EventInput::new(
            AuditEventType::PermissionDenied,
            action,
            resource,
            AuditSeverity::Warning,
            AuditOutcome::Failure,
        )
        .with_actor(actor),
    )
}

/// Suspicious activity: critical, failure
pub(super) fn record_suspicious_activity(
    log: &AuditLog,
    description: String,
    resource: String,
    actor: Option<Actor>,
    source: Option<SourceContext>,
) -> AuditResult<u64> {
    let mut input = EventInput::new(
        AuditEventType::SuspiciousActivity,
        description,
        resource,
        AuditSeverity::Critical,
        AuditOutcome::Failure,
    );
    if let Some(actor) = actor {
        input = input.with_actor(actor);
    }
    if let Some(source) = source {
        input = input.with_source(source);
    }
    record(log, input)
}

/// One system-started event, recorded at startup when the host opts in
pub(super) fn record_startup(log: &AuditLog) -> AuditResult<u64> {
    record(
        log,
        EventInput::new(
            AuditEventType::SystemStarted,
            "startup",
            "application",
            AuditSeverity::Info,
            AuditOutcome::Success,
        ),
    )
}
