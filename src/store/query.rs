//! Query operations for the audit log
//!
//! Queries snapshot the store under the read lock, filter, sort newest
//! first, then paginate. Large stores are filtered in parallel.

use rayon::prelude::*;

use crate::types::{AuditEvent, AuditFilter};

use super::AuditLog;

/// Threshold for using parallel filtering (event count)
const PARALLEL_FILTER_THRESHOLD: usize = 1_000;

/// Default page size when the filter does not set a limit
const DEFAULT_LIMIT: usize = 100;

/// Run a filter against the store
///
/// Results are ordered by timestamp descending with ids breaking ties,
/// so the most recent event is always first. Offset and limit apply after
/// filtering and sorting; an offset past the end yields an empty vec.
pub(super) fn query(log: &AuditLog, filter: &AuditFilter) -> Vec<AuditEvent> {
    let mut matched: Vec<AuditEvent> = {
        let state = log.state.read();
        if state.events.len() > PARALLEL_FILTER_THRESHOLD {
            state
                .events
                .par_iter()
                .filter(|e| filter.matches(e))
                .cloned()
                .collect()
        } else {
            state
                .events
                .iter()
                .filter(|e| filter.matches(e))
                .cloned()
                .collect()
        }
    };

    matched.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));

    let offset = filter.offset.unwrap_or(0);
    let limit = filter.limit.unwrap_or(DEFAULT_LIMIT);
    matched.into_iter().skip(offset).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Actor, AuditEventType, AuditOutcome, AuditSeverity, EventInput};

    fn seeded_log(count: usize) -> AuditLog {
        let log = AuditLog::new();
        for i in 0..count {
            log.record(
                EventInput::new(
                    AuditEventType::RecordViewed,
                    format!("view-{}", i),
                    "report",
                    AuditSeverity::Info,
                    AuditOutcome::Success,
                )
                .with_actor(Actor::new(format!("u-{}", i % 3))),
            )
            .unwrap();
        }
        log
    }

    #[test]
    fn test_results_are_most_recent_first() {
        let log = seeded_log(5);
        let events = log.query(&AuditFilter::new());

        let ids: Vec<u64> = events.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_default_limit_is_applied() {
        let log = seeded_log(150);
        let events = log.query(&AuditFilter::new());
        assert_eq!(events.len(), 100);
        assert_eq!(events[0].id, 150);
    }

    #[test]
    fn test_offset_and_limit_paginate() {
        let log = seeded_log(10);
        let page = log.query(&AuditFilter::new().with_offset(3).with_limit(4));

        let ids: Vec<u64> = page.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![7, 6, 5, 4]);
    }

    #[test]
    fn test_offset_past_end_is_empty() {
        let log = seeded_log(3);
        let page = log.query(&AuditFilter::new().with_offset(50));
        assert!(page.is_empty());
    }

    #[test]
    fn test_user_id_filter() {
        let log = seeded_log(9);
        let events = log.query(&AuditFilter::new().with_user_id("u-1"));

        assert_eq!(events.len(), 3);
        for event in &events {
            assert_eq!(event.actor.as_ref().unwrap().user_id, "u-1");
        }
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        // Enough events to cross the rayon threshold.
        let log = seeded_log(PARALLEL_FILTER_THRESHOLD + 200);
        let filter = AuditFilter::new().with_user_id("u-2").with_limit(5_000);
        let events = log.query(&filter);

        assert_eq!(events.len(), (PARALLEL_FILTER_THRESHOLD + 200) / 3);
        // Still sorted newest first after the parallel collect.
        for pair in events.windows(2) {
            assert!(pair[0].id > pair[1].id);
        }
    }

    #[test]
    fn test_severity_scenario() {
        // Three events with severities info, critical, warning; the critical
        // filter returns exactly the second one.
        let log = AuditLog::new();
        log.record(EventInput::new(
            AuditEventType::RecordViewed,
            "view",
            "report",
            AuditSeverity::Info,
            AuditOutcome::Success,
        ))
        .unwrap();
        let critical_id = log
            .record(EventInput::new(
                AuditEventType::SuspiciousActivity,
                "probe",
                "api",
                AuditSeverity::Critical,
                AuditOutcome::Failure,
            ))
            .unwrap();
        log.record(EventInput::new(
            AuditEventType::LoginFailure,
            "login",
            "session",
            AuditSeverity::Warning,
            AuditOutcome::Failure,
        ))
        .unwrap();

        let events = log.query(&AuditFilter::new().with_severity(AuditSeverity::Critical));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, critical_id);
    }
}
