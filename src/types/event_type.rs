//! The closed catalog of auditable event types
//!
//! Every security-relevant action the host can report maps to one variant.
//! Variants carry a stable `snake_case` wire name and are grouped into five
//! categories used by the stats aggregator.

use serde::{Deserialize, Serialize};

/// Category an event type belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Authentication,
    UserManagement,
    DataAccess,
    Security,
    System,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Authentication => write!(f, "authentication"),
            EventCategory::UserManagement => write!(f, "user_management"),
            EventCategory::DataAccess => write!(f, "data_access"),
            EventCategory::Security => write!(f, "security"),
            EventCategory::System => write!(f, "system"),
        }
    }
}

/// Type of audit event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEventType {
    // Authentication
    LoginSuccess,
    LoginFailure,
    Logout,
    SessionExpired,
    PasswordChanged,
    PasswordResetRequested,
    TwoFactorEnabled,
    TwoFactorDisabled,

    // User management
    UserCreated,
    UserUpdated,
    UserDeleted,
    RoleAssigned,
    RoleRevoked,
    AccountLocked,
    AccountUnlocked,

    // Data access
    RecordViewed,
    RecordCreated,
    RecordUpdated,
    RecordDeleted,
    DataExported,
    DataImported,
    ReportGenerated,

    // Security
    PermissionDenied,
    SuspiciousActivity,
    RateLimitExceeded,
    ApiKeyCreated,
    ApiKeyRevoked,
    IntegrityCheckFailed,

    // System
    SystemStarted,
    SystemStopped,
    ConfigChanged,
    BackupCreated,
    MaintenanceMode,
}

impl AuditEventType {
    /// Category this event type belongs to
    pub fn category(&self) -> EventCategory {
        use AuditEventType::*;
        match self {
            LoginSuccess | LoginFailure | Logout | SessionExpired | PasswordChanged
            | PasswordResetRequested | TwoFactorEnabled | TwoFactorDisabled => {
                EventCategory::Authentication
            }
            UserCreated | UserUpdated | UserDeleted | RoleAssigned | RoleRevoked
            | AccountLocked | AccountUnlocked => EventCategory::UserManagement,
            RecordViewed | RecordCreated | RecordUpdated | RecordDeleted | DataExported
            | DataImported | ReportGenerated => EventCategory::DataAccess,
            PermissionDenied | SuspiciousActivity | RateLimitExceeded | ApiKeyCreated
            | ApiKeyRevoked | IntegrityCheckFailed => EventCategory::Security,
            SystemStarted | SystemStopped | ConfigChanged | BackupCreated | MaintenanceMode => {
                EventCategory::System
            }
        }
    }

    /// Stable wire name, identical to the serde token
    pub fn as_str(&self) -> &'static str {
        use AuditEventType::*;
        match self {
            LoginSuccess => "login_success",
            LoginFailure => "login_failure",
            Logout => "logout",
            SessionExpired => "session_expired",
            PasswordChanged => "password_changed",
            PasswordResetRequested => "password_reset_requested",
            TwoFactorEnabled => "two_factor_enabled",
            TwoFactorDisabled => "two_factor_disabled",
            UserCreated => "user_created",
            UserUpdated => "user_updated",
            UserDeleted => "user_deleted",
            RoleAssigned => "role_assigned",
            RoleRevoked => "role_revoked",
            AccountLocked => "account_locked",
            AccountUnlocked => "account_unlocked",
            RecordViewed => "record_viewed",
            RecordCreated => "record_created",
            RecordUpdated => "record_updated",
            RecordDeleted => "record_deleted",
            DataExported => "data_exported",
            DataImported => "data_imported",
            ReportGenerated => "report_generated",
            PermissionDenied => "permission_denied",
            SuspiciousActivity => "suspicious_activity",
            RateLimitExceeded => "rate_limit_exceeded",
            ApiKeyCreated => "api_key_created",
            ApiKeyRevoked => "api_key_revoked",
            IntegrityCheckFailed => "integrity_check_failed",
            SystemStarted => "system_started",
            SystemStopped => "system_stopped",
            ConfigChanged => "config_changed",
            BackupCreated => "backup_created",
            MaintenanceMode => "maintenance_mode",
        }
    }
}

impl std::fmt::Display for AuditEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_serialization() {
        let json = serde_json::to_string(&AuditEventType::LoginFailure).unwrap();
        assert_eq!(json, "\"login_failure\"");

        let parsed: AuditEventType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, AuditEventType::LoginFailure);
    }

    #[test]
    fn test_wire_name_matches_serde_token() {
        for event_type in [
            AuditEventType::LoginSuccess,
            AuditEventType::UserDeleted,
            AuditEventType::RecordViewed,
            AuditEventType::SuspiciousActivity,
            AuditEventType::SystemStarted,
        ] {
            let json = serde_json::to_string(&event_type).unwrap();
            assert_eq!(json, format!("\"{}\"", event_type.as_str()));
        }
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            AuditEventType::LoginFailure.category(),
            EventCategory::Authentication
        );
        assert_eq!(
            AuditEventType::RoleAssigned.category(),
            EventCategory::UserManagement
        );
        assert_eq!(
            AuditEventType::DataExported.category(),
            EventCategory::DataAccess
        );
        assert_eq!(
            AuditEventType::SuspiciousActivity.category(),
            EventCategory::Security
        );
        assert_eq!(
            AuditEventType::ConfigChanged.category(),
            EventCategory::System
        );
    }
}
