//! Age-based retention for the audit log
//!
//! Retention is triggered by an external scheduler and is independent of
//! capacity eviction; both run through the same compaction routine.

use chrono::{Duration, Utc};

use super::{compact, AuditLog};

/// Remove every event older than `max_age_days`
///
/// Returns the exact number of events removed. Calling again with no
/// intervening appends removes nothing.
pub(super) fn purge_older_than(log: &AuditLog, max_age_days: i64) -> usize {
    let cutoff = Utc::now() - Duration::days(max_age_days);

    let removed = {
        let mut state = log.state.write();
        compact(&mut state, log.config.capacity, Some(cutoff))
    };

    if removed > 0 {
        tracing::info!(removed, max_age_days, "purged expired audit events");
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::record::append;
    use crate::types::{
        AuditEventType, AuditFilter, AuditOutcome, AuditSeverity, EventInput,
    };

    fn input() -> EventInput {
        EventInput::new(
            AuditEventType::RecordViewed,
            "view",
            "report",
            AuditSeverity::Info,
            AuditOutcome::Success,
        )
    }

    #[test]
    fn test_purge_removes_only_expired_events() {
        let log = AuditLog::new();
        append(&log, input(), Utc::now() - Duration::days(100)).unwrap();
        append(&log, input(), Utc::now() - Duration::days(50)).unwrap();
        log.record(input()).unwrap();

        let removed = log.purge_older_than(60);

        assert_eq!(removed, 1);
        assert_eq!(log.len(), 2);
        let ids: Vec<u64> = log
            .query(&AuditFilter::new())
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_purge_is_idempotent() {
        let log = AuditLog::new();
        append(&log, input(), Utc::now() - Duration::days(100)).unwrap();
        log.record(input()).unwrap();

        assert_eq!(log.purge_older_than(30), 1);
        assert_eq!(log.purge_older_than(30), 0);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_purge_on_empty_store() {
        let log = AuditLog::new();
        assert_eq!(log.purge_older_than(30), 0);
    }

    #[test]
    fn test_ids_keep_increasing_after_purge() {
        let log = AuditLog::new();
        append(&log, input(), Utc::now() - Duration::days(100)).unwrap();
        log.purge_older_than(30);

        let next = log.record(input()).unwrap();
        assert_eq!(next, 2);
    }
}
