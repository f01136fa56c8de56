//! Audit log repository trait defining the interface for audit persistence.

use async_trait::async_trait;

use crate::domain::entities::audit::AuditLog;
use crate::errors::DomainError;

/// Repository trait for AuditLog entity persistence operations
///
/// Implementations should write entries without blocking authentication
/// flows; the audit service wraps writes in a best-effort layer.
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Create a new audit log entry
    async fn create(&self, audit_log: &AuditLog) -> Result<(), DomainError>;

    /// Find audit logs by user id, newest first
    async fn find_by_user(&self, user_id: i64, limit: usize)
        -> Result<Vec<AuditLog>, DomainError>;
}
