//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Recouvro backend.
//! It provides concrete implementations for the seams the core crate
//! defines:
//!
//! - **Cache**: Redis client and the Redis-backed revocation store
//! - **Database**: PostgreSQL repositories using SQLx

/// Cache module - Redis client and revocation store
pub mod cache;

/// Database module - PostgreSQL implementations using SQLx
pub mod database;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
