//! Database module - PostgreSQL implementations using SQLx

pub mod postgres;

pub use postgres::{PgAuditLogRepository, PgUserRepository};

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use tracing::info;

use rc_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Create a PostgreSQL connection pool from configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, InfrastructureError> {
    info!(
        "Creating database pool (max_connections: {})",
        config.max_connections
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .connect(&config.url)
        .await?;

    Ok(pool)
}
