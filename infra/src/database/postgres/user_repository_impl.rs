//! PostgreSQL implementation of the UserRepository trait.
//!
//! Reads the `utilisateurs` table of the collection database. The
//! authentication core only looks users up; account CRUD lives elsewhere.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use rc_core::domain::entities::user::{Role, User};
use rc_core::errors::DomainError;
use rc_core::repositories::UserRepository;

/// PostgreSQL implementation of UserRepository
pub struct PgUserRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PostgreSQL user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, DomainError> {
        let role_str: String = row
            .try_get("role")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get role: {}", e),
            })?;
        let role = Role::parse_str(&role_str).ok_or_else(|| DomainError::Database {
            message: format!("Unknown role: {}", role_str),
        })?;

        Ok(User {
            id: row.try_get("id_utilisateur").map_err(|e| DomainError::Database {
                message: format!("Failed to get id_utilisateur: {}", e),
            })?,
            first_name: row.try_get("prenom").map_err(|e| DomainError::Database {
                message: format!("Failed to get prenom: {}", e),
            })?,
            last_name: row.try_get("nom").map_err(|e| DomainError::Database {
                message: format!("Failed to get nom: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            password_hash: row.try_get("mot_de_passe").map_err(|e| DomainError::Database {
                message: format!("Failed to get mot_de_passe: {}", e),
            })?,
            role,
            phone: row.try_get("telephone").map_err(|e| DomainError::Database {
                message: format!("Failed to get telephone: {}", e),
            })?,
            agency_id: row.try_get("id_agence").map_err(|e| DomainError::Database {
                message: format!("Failed to get id_agence: {}", e),
            })?,
            is_active: row.try_get("actif").map_err(|e| DomainError::Database {
                message: format!("Failed to get actif: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("date_creation")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get date_creation: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("date_modification")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get date_modification: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id_utilisateur, nom, prenom, email, mot_de_passe, role,
                   telephone, id_agence, actif, date_creation, date_modification
            FROM utilisateurs
            WHERE email = $1
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id_utilisateur, nom, prenom, email, mot_de_passe, role,
                   telephone, id_agence, actif, date_creation, date_modification
            FROM utilisateurs
            WHERE id_utilisateur = $1
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }
}
