//! Audit log store - core engine
//!
//! This module contains the bounded, append-only event store with
//! thread-safe recording, queries, windowed stats, retention and export.

mod export;
mod query;
mod record;
mod retention;
mod stats;

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::sink::{AlertSink, TracingSink};
use crate::types::{
    Actor, AuditEvent, AuditEventType, AuditFilter, AuditOutcome, AuditStats, EventInput,
    SourceContext,
};

pub use export::ExportFormat;

/// Default maximum number of retained events
pub const DEFAULT_CAPACITY: usize = 10_000;

/// Configuration for the audit log
#[derive(Debug, Clone)]
pub struct AuditLogConfig {
    /// Maximum number of events kept in the store
    pub capacity: usize,
}

impl Default for AuditLogConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl AuditLogConfig {
    /// Create config with a custom capacity
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}

/// Result type for audit log operations
pub type AuditResult<T> = Result<T, AuditError>;

/// Errors raised by the audit log
///
/// Every variant is a caller-contract violation; storage pressure is
/// handled by eviction and is never an error.
#[derive(Debug)]
pub enum AuditError {
    /// A required free-text field was empty on `record`
    MissingField(&'static str),
    /// An export format outside the supported set was requested
    UnsupportedFormat(String),
    /// Serialization failed during export
    Json(serde_json::Error),
}

impl std::fmt::Display for AuditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditError::MissingField(field) => write!(f, "missing required field: {}", field),
            AuditError::UnsupportedFormat(format) => {
                write!(f, "unsupported export format: {}", format)
            }
            AuditError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for AuditError {}

impl From<serde_json::Error> for AuditError {
    fn from(e: serde_json::Error) -> Self {
        AuditError::Json(e)
    }
}

/// Mutable state behind the store lock
pub(crate) struct LogState {
    /// Insertion-ordered events, oldest at the front
    pub(crate) events: VecDeque<AuditEvent>,
    /// Last assigned sequence number
    pub(crate) last_id: u64,
}

/// Bounded, append-only audit log
///
/// One instance is shared process-wide and injected into every consumer.
/// `record` and `purge_older_than` take the write lock; `query`, `stats`
/// and `export` take the read lock and observe a consistent snapshot.
pub struct AuditLog {
    pub(crate) config: AuditLogConfig,
    pub(crate) state: RwLock<LogState>,
    pub(crate) sink: Arc<dyn AlertSink>,
}

impl AuditLog {
    /// Create an empty audit log with default config
    pub fn new() -> Self {
        Self::with_config(AuditLogConfig::default())
    }

    /// Create an empty audit log with custom config
    pub fn with_config(config: AuditLogConfig) -> Self {
        Self {
            config,
            state: RwLock::new(LogState {
                events: VecDeque::new(),
                last_id: 0,
            }),
            sink: Arc::new(TracingSink),
        }
    }

    /// Replace the alert sink
    pub fn with_sink(mut self, sink: Arc<dyn AlertSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &AuditLogConfig {
        &self.config
    }

    /// Maximum number of retained events
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Number of events currently stored
    pub fn len(&self) -> usize {
        self.state.read().events.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.state.read().events.is_empty()
    }

    /// Last assigned sequence number, 0 before the first append
    pub fn last_id(&self) -> u64 {
        self.state.read().last_id
    }
}

impl Default for AuditLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop events from the state, one routine for both deletion rules
///
/// Removes events older than `cutoff` when one is given, then evicts from
/// the front until the store fits `capacity`. Returns how many events were
/// removed. Capacity eviction on append and age purge on demand both run
/// through here so the two rules cannot diverge.
pub(crate) fn compact(
    state: &mut LogState,
    capacity: usize,
    cutoff: Option<DateTime<Utc>>,
) -> usize {
    let before = state.events.len();

    if let Some(cutoff) = cutoff {
        state.events.retain(|e| e.timestamp >= cutoff);
    }

    while state.events.len() > capacity {
        state.events.pop_front();
    }

    before - state.events.len()
}

// Re-export methods from submodules by implementing them here
impl AuditLog {
    // Recording (from record.rs)

    /// Validate, stamp and append an event; returns the assigned id
    pub fn record(&self, input: EventInput) -> AuditResult<u64> {
        record::record(self, input)
    }

    /// Record a login attempt; severity derives from the outcome
    pub fn record_login(
        &self,
        actor: Actor,
        outcome: AuditOutcome,
        source: Option<SourceContext>,
    ) -> AuditResult<u64> {
        record::record_login(self, actor, outcome, source)
    }

    /// Record a read/write of domain data, always severity info
    pub fn record_data_access(
        &self,
        event_type: AuditEventType,
        actor: Actor,
        action: impl Into<String>,
        resource: impl Into<String>,
    ) -> AuditResult<u64> {
        record::record_data_access(self, event_type, actor, action.into(), resource.into())
    }

    /// Record a denied authorization check
    pub fn record_permission_denied(
        &self,
        actor: Actor,
        action: impl Into<String>,
        resource: impl Into<String>,
    ) -> AuditResult<u64> {
        record::record_permission_denied(self, actor, action.into(), resource.into())
    }

    /// Record suspicious activity, always critical with outcome failure
    pub fn record_suspicious_activity(
        &self,
        description: impl Into<String>,
        resource: impl Into<String>,
        actor: Option<Actor>,
        source: Option<SourceContext>,
    ) -> AuditResult<u64> {
        record::record_suspicious_activity(self, description.into(), resource.into(), actor, source)
    }

    /// Seed the log with one system-started event
    pub fn record_startup(&self) -> AuditResult<u64> {
        record::record_startup(self)
    }

    // Queries (from query.rs)

    /// Filtered, sorted, paginated snapshot of the store
    pub fn query(&self, filter: &AuditFilter) -> Vec<AuditEvent> {
        query::query(self, filter)
    }

    // Stats (from stats.rs)

    /// Aggregate events recorded in the last `window_days` days
    pub fn stats(&self, window_days: i64) -> AuditStats {
        stats::stats(self, window_days)
    }

    // Retention (from retention.rs)

    /// Remove events older than `max_age_days`; returns the removed count
    pub fn purge_older_than(&self, max_age_days: i64) -> usize {
        retention::purge_older_than(self, max_age_days)
    }

    // Export (from export.rs)

    /// Serialize the entire store to the given format
    pub fn export(&self, format: ExportFormat) -> AuditResult<String> {
        export::export(self, format)
    }
}
