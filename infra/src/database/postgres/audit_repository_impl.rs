//! PostgreSQL implementation of the AuditLogRepository trait.
//!
//! Writes authentication events to the `journal_audit` table. Writes are
//! wrapped by the audit service's best-effort layer; a failed insert is
//! logged upstream and never fails the parent operation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use rc_core::domain::entities::audit::{AuditEventType, AuditLog};
use rc_core::errors::DomainError;
use rc_core::repositories::AuditLogRepository;

/// PostgreSQL implementation of AuditLogRepository
pub struct PgAuditLogRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgAuditLogRepository {
    /// Create a new PostgreSQL audit log repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert database row to AuditLog entity
    fn row_to_audit_log(row: &sqlx::postgres::PgRow) -> Result<AuditLog, DomainError> {
        let event_str: String = row.try_get("evenement").map_err(|e| DomainError::Database {
            message: format!("Failed to get evenement: {}", e),
        })?;
        let event_type =
            AuditEventType::parse_str(&event_str).ok_or_else(|| DomainError::Database {
                message: format!("Unknown audit event: {}", event_str),
            })?;

        Ok(AuditLog {
            id: row.try_get::<Uuid, _>("id").map_err(|e| DomainError::Database {
                message: format!("Failed to get id: {}", e),
            })?,
            event_type,
            user_id: row.try_get("id_utilisateur").map_err(|e| DomainError::Database {
                message: format!("Failed to get id_utilisateur: {}", e),
            })?,
            ip_address: row.try_get("ip_address").map_err(|e| DomainError::Database {
                message: format!("Failed to get ip_address: {}", e),
            })?,
            user_agent: row.try_get("user_agent").map_err(|e| DomainError::Database {
                message: format!("Failed to get user_agent: {}", e),
            })?,
            description: row.try_get("description").map_err(|e| DomainError::Database {
                message: format!("Failed to get description: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("date_action")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get date_action: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl AuditLogRepository for PgAuditLogRepository {
    async fn create(&self, audit_log: &AuditLog) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO journal_audit (
                id, evenement, id_utilisateur, ip_address, user_agent,
                description, date_action
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#;

        sqlx::query(query)
            .bind(audit_log.id)
            .bind(audit_log.event_type.as_str())
            .bind(audit_log.user_id)
            .bind(&audit_log.ip_address)
            .bind(&audit_log.user_agent)
            .bind(&audit_log.description)
            .bind(audit_log.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create audit log: {}", e),
            })?;

        Ok(())
    }

    async fn find_by_user(
        &self,
        user_id: i64,
        limit: usize,
    ) -> Result<Vec<AuditLog>, DomainError> {
        let query = r#"
            SELECT id, evenement, id_utilisateur, ip_address, user_agent,
                   description, date_action
            FROM journal_audit
            WHERE id_utilisateur = $1
            ORDER BY date_action DESC
            LIMIT $2
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        rows.iter().map(Self::row_to_audit_log).collect()
    }
}
