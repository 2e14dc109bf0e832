//! Windowed statistics for the audit log
//!
//! One linear pass over the events inside the window. The window has a
//! lower bound only, so events with clock-skewed future timestamps are
//! counted rather than dropped.

use chrono::{Duration, Utc};

use crate::types::{AuditEventType, AuditOutcome, AuditStats, EventCategory};

use super::AuditLog;

/// How many error/critical events the stats report carries
const RECENT_ALERTS_LIMIT: usize = 10;

/// Aggregate events recorded within the last `window_days` days
pub(super) fn stats(log: &AuditLog, window_days: i64) -> AuditStats {
    let cutoff = Utc::now() - Duration::days(window_days);
    let state = log.state.read();

    let mut stats = AuditStats::default();
    for event in state.events.iter().filter(|e| e.timestamp >= cutoff) {
        stats.total_events += 1;
        *stats.events_by_type.entry(event.event_type).or_insert(0) += 1;
        *stats.events_by_severity.entry(event.severity).or_insert(0) += 1;

        if event.event_type.category() == EventCategory::Authentication
            && event.outcome == AuditOutcome::Failure
        {
            stats.failed_login_attempts += 1;
        }
        if event.event_type == AuditEventType::SuspiciousActivity {
            stats.suspicious_activities += 1;
        }
        if event.severity.is_alert() && stats.recent_alerts.len() < RECENT_ALERTS_LIMIT {
            stats.recent_alerts.push(event.clone());
        }
    }

    stats
}
