//! Severity and outcome classifications for audit events

use serde::{Deserialize, Serialize};

/// Severity of an audit event
///
/// Variants are declared in ascending order so the derived `Ord`
/// matches the ordinal: `Info < Warning < Error < Critical`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum AuditSeverity {
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl AuditSeverity {
    /// Whether events of this severity are forwarded to the alert sink
    pub fn is_alert(&self) -> bool {
        *self >= AuditSeverity::Error
    }
}

impl std::fmt::Display for AuditSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditSeverity::Info => write!(f, "info"),
            AuditSeverity::Warning => write!(f, "warning"),
            AuditSeverity::Error => write!(f, "error"),
            AuditSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// Outcome of the audited action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditOutcome {
    Success,
    Failure,
}

impl std::fmt::Display for AuditOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditOutcome::Success => write!(f, "success"),
            AuditOutcome::Failure => write!(f, "failure"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(AuditSeverity::Info < AuditSeverity::Warning);
        assert!(AuditSeverity::Warning < AuditSeverity::Error);
        assert!(AuditSeverity::Error < AuditSeverity::Critical);
    }

    #[test]
    fn test_alert_threshold() {
        assert!(!AuditSeverity::Info.is_alert());
        assert!(!AuditSeverity::Warning.is_alert());
        assert!(AuditSeverity::Error.is_alert());
        assert!(AuditSeverity::Critical.is_alert());
    }

    #[test]
    fn test_severity_serialization() {
        let json = serde_json::to_string(&AuditSeverity::Critical).unwrap();
        assert_eq!(json, "\"critical\"");

        let parsed: AuditSeverity = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(parsed, AuditSeverity::Warning);
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_string(&AuditOutcome::Failure).unwrap();
        assert_eq!(json, "\"failure\"");
    }
}
