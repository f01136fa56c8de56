//! Mock implementation of AuditLogRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::audit::AuditLog;
use crate::errors::DomainError;

use super::AuditLogRepository;

/// In-memory audit log repository for testing
pub struct MockAuditLogRepository {
    entries: Arc<RwLock<Vec<AuditLog>>>,
}

impl MockAuditLogRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// All recorded entries, in insertion order
    pub async fn entries(&self) -> Vec<AuditLog> {
        self.entries.read().await.clone()
    }
}

impl Default for MockAuditLogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditLogRepository for MockAuditLogRepository {
    async fn create(&self, audit_log: &AuditLog) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        entries.push(audit_log.clone());
        Ok(())
    }

    async fn find_by_user(
        &self,
        user_id: i64,
        limit: usize,
    ) -> Result<Vec<AuditLog>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .filter(|e| e.user_id == Some(user_id))
            .rev()
            .take(limit)
            .cloned()
            .collect())
    }
}
