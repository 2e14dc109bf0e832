//! Audit event records
//!
//! An `AuditEvent` is an immutable record of a security-relevant action.
//! Callers describe the action with an `EventInput`; the store assigns the
//! sequence id and the timestamp at append time.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AuditEventType, AuditOutcome, AuditSeverity};

/// Who performed the audited action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Actor {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            username: None,
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Name shown in reports: username when known, user id otherwise
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.user_id)
    }
}

/// Where the audited action originated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(rename = "userAgent", skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl SourceContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// Scalar value allowed in `details`/`metadata` maps
///
/// The closed set keeps serialization and the CSV projection well-defined.
/// Untagged: timestamps are tried before plain strings so RFC 3339 values
/// round-trip as `Timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Bool(bool),
    Number(f64),
    Timestamp(DateTime<Utc>),
    String(String),
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        MetaValue::String(value.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(value: String) -> Self {
        MetaValue::String(value)
    }
}

impl From<f64> for MetaValue {
    fn from(value: f64) -> Self {
        MetaValue::Number(value)
    }
}

impl From<i64> for MetaValue {
    fn from(value: i64) -> Self {
        MetaValue::Number(value as f64)
    }
}

impl From<bool> for MetaValue {
    fn from(value: bool) -> Self {
        MetaValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for MetaValue {
    fn from(value: DateTime<Utc>) -> Self {
        MetaValue::Timestamp(value)
    }
}

/// An immutable event in the audit log
///
/// Events are created only by the store's append operation and are never
/// mutated in place. They leave the store through capacity eviction or a
/// retention purge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Unique, auto-incrementing sequence number
    pub id: u64,

    /// UTC instant assigned at append time
    #[serde(rename = "ts")]
    pub timestamp: DateTime<Utc>,

    /// Type of event
    #[serde(rename = "eventType")]
    pub event_type: AuditEventType,

    /// Who performed the action, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<Actor>,

    /// What was done
    pub action: String,

    /// What it was done to
    pub resource: String,

    /// Identifier of the specific resource instance
    #[serde(rename = "resourceId", skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,

    /// Severity classification
    pub severity: AuditSeverity,

    /// Whether the action succeeded
    pub outcome: AuditOutcome,

    /// Network origin of the action
    #[serde(rename = "sourceContext", skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceContext>,

    /// Action-specific payload
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, MetaValue>,

    /// Caller-supplied annotations
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, MetaValue>,
}

impl AuditEvent {
    /// Materialize an input as a stored event
    ///
    /// Only the store calls this; `id` and `timestamp` are its to assign.
    pub(crate) fn from_input(id: u64, timestamp: DateTime<Utc>, input: EventInput) -> Self {
        Self {
            id,
            timestamp,
            event_type: input.event_type,
            actor: input.actor,
            action: input.action,
            resource: input.resource,
            resource_id: input.resource_id,
            severity: input.severity,
            outcome: input.outcome,
            source: input.source,
            details: input.details,
            metadata: input.metadata,
        }
    }

    /// Name shown in reports: username, else user id, else "System"
    pub fn actor_name(&self) -> &str {
        self.actor
            .as_ref()
            .map(|a| a.display_name())
            .unwrap_or("System")
    }
}

/// Caller-provided description of an event, before the store stamps it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventInput {
    #[serde(rename = "eventType")]
    pub event_type: AuditEventType,
    pub action: String,
    pub resource: String,
    pub severity: AuditSeverity,
    pub outcome: AuditOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<Actor>,
    #[serde(rename = "resourceId", skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(rename = "sourceContext", skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceContext>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, MetaValue>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, MetaValue>,
}

impl EventInput {
    /// Create an input with the required fields
    pub fn new(
        event_type: AuditEventType,
        action: impl Into<String>,
        resource: impl Into<String>,
        severity: AuditSeverity,
        outcome: AuditOutcome,
    ) -> Self {
        Self {
            event_type,
            action: action.into(),
            resource: resource.into(),
            severity,
            outcome,
            actor: None,
            resource_id: None,
            source: None,
            details: HashMap::new(),
            metadata: HashMap::new(),
        }
    }

    pub fn with_actor(mut self, actor: Actor) -> Self {
        self.actor = Some(actor);
        self
    }

    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    pub fn with_source(mut self, source: SourceContext) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<MetaValue>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<MetaValue>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
