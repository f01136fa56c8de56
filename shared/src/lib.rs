//! Shared utilities and common types for the Recouvro server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types with environment loading
//! - Common response structures

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    CacheConfig, DatabaseConfig, Environment, JwtConfig, ServerConfig,
};
pub use types::ErrorResponse;
