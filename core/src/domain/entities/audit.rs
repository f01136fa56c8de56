//! Audit log entity for recording authentication events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event types for authentication auditing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditEventType {
    /// Successful credential login
    LoginSuccess,
    /// Failed credential login
    LoginFailure,
    /// Access token exchanged via refresh token
    TokenRefreshed,
    /// Single-token logout
    Logout,
    /// Logout from every device
    LogoutAllDevices,
}

impl AuditEventType {
    /// Convert to string representation for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoginSuccess => "LOGIN_SUCCESS",
            Self::LoginFailure => "LOGIN_FAILURE",
            Self::TokenRefreshed => "TOKEN_REFRESHED",
            Self::Logout => "LOGOUT",
            Self::LogoutAllDevices => "LOGOUT_ALL_DEVICES",
        }
    }

    /// Parse from string representation
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "LOGIN_SUCCESS" => Some(Self::LoginSuccess),
            "LOGIN_FAILURE" => Some(Self::LoginFailure),
            "TOKEN_REFRESHED" => Some(Self::TokenRefreshed),
            "LOGOUT" => Some(Self::Logout),
            "LOGOUT_ALL_DEVICES" => Some(Self::LogoutAllDevices),
            _ => None,
        }
    }
}

/// An audit trail entry for an authentication event
///
/// Audit writes are a best-effort side channel: they are recorded after the
/// gating decision and never fail the parent operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditLog {
    /// Unique identifier for the log entry
    pub id: Uuid,

    /// Type of authentication event
    pub event_type: AuditEventType,

    /// User id if known (None for failed logins against unknown emails)
    pub user_id: Option<i64>,

    /// IP address of the request
    pub ip_address: Option<String>,

    /// User agent string from the request
    pub user_agent: Option<String>,

    /// Human-readable description of the event
    pub description: Option<String>,

    /// Timestamp when the event occurred
    pub created_at: DateTime<Utc>,
}

impl AuditLog {
    /// Creates a new audit log entry
    pub fn new(event_type: AuditEventType) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_type,
            user_id: None,
            ip_address: None,
            user_agent: None,
            description: None,
            created_at: Utc::now(),
        }
    }

    /// Associates the entry with a user
    pub fn with_user(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Attaches request context
    pub fn with_request_context(
        mut self,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Self {
        self.ip_address = ip_address;
        self.user_agent = user_agent;
        self
    }

    /// Attaches a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
