//! Configuration for the token service

use jsonwebtoken::Algorithm;
use std::str::FromStr;

use rc_shared::config::JwtConfig;

use crate::errors::{DomainError, DomainResult};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Access token expiry in minutes
    pub access_token_expire_minutes: i64,
    /// Refresh token expiry in days
    pub refresh_token_expire_days: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            access_token_expire_minutes: 30,
            refresh_token_expire_days: 7,
        }
    }
}

impl TokenServiceConfig {
    /// Build from the environment-driven JWT configuration
    pub fn from_jwt_config(config: &JwtConfig) -> DomainResult<Self> {
        let algorithm =
            Algorithm::from_str(&config.algorithm).map_err(|_| DomainError::Internal {
                message: format!("Unsupported signing algorithm: {}", config.algorithm),
            })?;

        Ok(Self {
            jwt_secret: config.secret.clone(),
            algorithm,
            access_token_expire_minutes: config.access_token_expire_minutes,
            refresh_token_expire_days: config.refresh_token_expire_days,
        })
    }
}
