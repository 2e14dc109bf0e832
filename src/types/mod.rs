//! Data types for the audit log engine
//!
//! This module contains all the core data structures used throughout the crate.

mod event;
mod event_type;
mod filter;
mod severity;
mod stats;

pub use event::{Actor, AuditEvent, EventInput, MetaValue, SourceContext};
pub use event_type::{AuditEventType, EventCategory};
pub use filter::AuditFilter;
pub use severity::{AuditOutcome, AuditSeverity};
pub use stats::AuditStats;
