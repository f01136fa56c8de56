//! Audit service for recording authentication events.

use std::sync::Arc;

use crate::domain::entities::audit::{AuditEventType, AuditLog};
use crate::errors::DomainResult;
use crate::repositories::AuditLogRepository;

/// Configuration for the audit service
#[derive(Debug, Clone)]
pub struct AuditServiceConfig {
    /// Whether writes run on a detached task instead of inline
    pub async_writes: bool,
}

impl Default for AuditServiceConfig {
    fn default() -> Self {
        Self { async_writes: true }
    }
}

/// Service for recording authentication audit events
pub struct AuditService<R>
where
    R: AuditLogRepository,
{
    repository: Arc<R>,
    config: AuditServiceConfig,
}

impl<R> AuditService<R>
where
    R: AuditLogRepository + 'static,
{
    /// Create a new audit service
    pub fn new(repository: Arc<R>, config: AuditServiceConfig) -> Self {
        Self { repository, config }
    }

    /// Log a credential login attempt
    pub async fn log_login(
        &self,
        user_id: Option<i64>,
        email: &str,
        success: bool,
        ip_address: Option<String>,
    ) -> DomainResult<()> {
        let event = if success {
            AuditEventType::LoginSuccess
        } else {
            AuditEventType::LoginFailure
        };

        let mut entry = AuditLog::new(event)
            .with_request_context(ip_address, None)
            .with_description(format!("Connexion: {}", email));
        if let Some(uid) = user_id {
            entry = entry.with_user(uid);
        }

        self.write_log(entry).await
    }

    /// Log a single-token logout
    pub async fn log_logout(&self, user_id: i64, email: &str) -> DomainResult<()> {
        let entry = AuditLog::new(AuditEventType::Logout)
            .with_user(user_id)
            .with_description(format!("Déconnexion: {}", email));
        self.write_log(entry).await
    }

    /// Log a logout from all devices
    pub async fn log_logout_all(&self, user_id: i64, email: &str) -> DomainResult<()> {
        let entry = AuditLog::new(AuditEventType::LogoutAllDevices)
            .with_user(user_id)
            .with_description(format!("Déconnexion globale (tous appareils): {}", email));
        self.write_log(entry).await
    }

    /// Log a token refresh
    pub async fn log_token_refreshed(&self, user_id: i64) -> DomainResult<()> {
        let entry = AuditLog::new(AuditEventType::TokenRefreshed).with_user(user_id);
        self.write_log(entry).await
    }

    /// Persist an entry, detaching the write when configured to
    async fn write_log(&self, entry: AuditLog) -> DomainResult<()> {
        if self.config.async_writes {
            let repository = Arc::clone(&self.repository);
            tokio::spawn(async move {
                if let Err(e) = repository.create(&entry).await {
                    tracing::warn!("Audit log write failed: {}", e);
                }
            });
            Ok(())
        } else {
            self.repository.create(&entry).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockAuditLogRepository;

    fn sync_service(repository: Arc<MockAuditLogRepository>) -> AuditService<MockAuditLogRepository> {
        AuditService::new(repository, AuditServiceConfig { async_writes: false })
    }

    #[tokio::test]
    async fn test_login_events_recorded() {
        let repository = Arc::new(MockAuditLogRepository::new());
        let service = sync_service(Arc::clone(&repository));

        service
            .log_login(Some(7), "marie@recouvro.fr", true, Some("10.0.0.1".to_string()))
            .await
            .unwrap();
        service
            .log_login(None, "intrus@recouvro.fr", false, None)
            .await
            .unwrap();

        let entries = repository.entries().await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].event_type, AuditEventType::LoginSuccess);
        assert_eq!(entries[0].user_id, Some(7));
        assert_eq!(entries[1].event_type, AuditEventType::LoginFailure);
        assert_eq!(entries[1].user_id, None);
    }

    #[tokio::test]
    async fn test_logout_events_recorded() {
        let repository = Arc::new(MockAuditLogRepository::new());
        let service = sync_service(Arc::clone(&repository));

        service.log_logout(7, "marie@recouvro.fr").await.unwrap();
        service.log_logout_all(7, "marie@recouvro.fr").await.unwrap();

        let entries = repository.find_by_user(7, 10).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].event_type, AuditEventType::LogoutAllDevices);
        assert_eq!(entries[1].event_type, AuditEventType::Logout);
    }
}
