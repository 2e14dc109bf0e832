//! Aggregated statistics over a time window

use std::collections::HashMap;

use serde::Serialize;

use super::{AuditEvent, AuditEventType, AuditSeverity};

/// Statistics over the events inside a stats window
///
/// Maps hold only keys actually observed in the window; a category with no
/// events has no entry rather than a zero.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditStats {
    /// Total number of events in the window
    #[serde(rename = "totalEvents")]
    pub total_events: usize,
    /// Event counts keyed by event type
    #[serde(rename = "eventsByType")]
    pub events_by_type: HashMap<AuditEventType, usize>,
    /// Event counts keyed by severity
    #[serde(rename = "eventsBySeverity")]
    pub events_by_severity: HashMap<AuditSeverity, usize>,
    /// Authentication events that ended in failure
    #[serde(rename = "failedLoginAttempts")]
    pub failed_login_attempts: usize,
    /// Suspicious-activity events
    #[serde(rename = "suspiciousActivities")]
    pub suspicious_activities: usize,
    /// First 10 error/critical events in the window, in store order
    #[serde(rename = "recentAlerts")]
    pub recent_alerts: Vec<AuditEvent>,
}
