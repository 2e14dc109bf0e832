//! Audit Ledger
//!
//! A bounded, append-only in-memory audit log engine for security-relevant
//! events, with multi-predicate queries, windowed statistics, age-based
//! retention and JSON/CSV export.
//!
//! # Features
//!
//! - **Bounded Store**: fixed capacity with oldest-first eviction
//! - **Thread-Safe**: one RwLock around the store; readers see consistent snapshots
//! - **Queries**: conjunctive predicates, newest-first ordering, pagination
//! - **Windowed Stats**: single-pass counts by type and severity
//! - **Retention**: age-based purges independent of capacity eviction
//! - **Alert Hook**: pluggable sink invoked on error/critical appends
//!
//! # Modules
//!
//! - `types`: Core data structures (AuditEvent, AuditFilter, AuditStats)
//! - `store`: The bounded store with record/query/stats/retention/export
//! - `sink`: Alert sinks for high-severity events
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use audit_ledger::{Actor, AuditFilter, AuditLog, AuditOutcome};
//!
//! let log = Arc::new(AuditLog::new());
//! log.record_startup().unwrap();
//! log.record_login(Actor::new("u-1").with_username("alice"), AuditOutcome::Failure, None)
//!     .unwrap();
//!
//! let recent = log.query(&AuditFilter::new().with_limit(10));
//! assert_eq!(recent.len(), 2);
//! assert_eq!(log.stats(7).failed_login_attempts, 1);
//! ```

pub mod sink;
pub mod store;
pub mod types;

// Re-export commonly used items at crate root
pub use sink::{AlertSink, NullSink, TracingSink};
pub use store::{
    AuditError, AuditLog, AuditLogConfig, AuditResult, ExportFormat, DEFAULT_CAPACITY,
};
pub use types::{
    Actor, AuditEvent, AuditEventType, AuditFilter, AuditOutcome, AuditSeverity, AuditStats,
    EventCategory, EventInput, MetaValue, SourceContext,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
