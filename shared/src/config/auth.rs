//! JWT signing and token lifetime configuration

use serde::{Deserialize, Serialize};

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,

    /// Signing algorithm identifier (e.g. "HS256")
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Access token lifetime in minutes
    pub access_token_expire_minutes: i64,

    /// Refresh token lifetime in days
    pub refresh_token_expire_days: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("your-secret-key-change-in-production"),
            algorithm: default_algorithm(),
            access_token_expire_minutes: 30,
            refresh_token_expire_days: 7,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    ///
    /// Reads `SECRET_KEY`, `ALGORITHM`, `ACCESS_TOKEN_EXPIRE_MINUTES`
    /// and `REFRESH_TOKEN_EXPIRE_DAYS`.
    pub fn from_env() -> Self {
        let secret = std::env::var("SECRET_KEY")
            .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string());
        let algorithm = std::env::var("ALGORITHM").unwrap_or_else(|_| default_algorithm());
        let access_token_expire_minutes = std::env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);
        let refresh_token_expire_days = std::env::var("REFRESH_TOKEN_EXPIRE_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse()
            .unwrap_or(7);

        Self {
            secret,
            algorithm,
            access_token_expire_minutes,
            refresh_token_expire_days,
        }
    }

    /// Set access token lifetime in minutes
    pub fn with_access_expire_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expire_minutes = minutes;
        self
    }

    /// Set refresh token lifetime in days
    pub fn with_refresh_expire_days(mut self, days: i64) -> Self {
        self.refresh_token_expire_days = days;
        self
    }

    /// Access token lifetime in seconds
    pub fn access_token_expire_seconds(&self) -> i64 {
        self.access_token_expire_minutes * 60
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "your-secret-key-change-in-production"
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_expire_minutes, 30);
        assert_eq!(config.refresh_token_expire_days, 7);
        assert_eq!(config.algorithm, "HS256");
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret")
            .with_access_expire_minutes(15)
            .with_refresh_expire_days(14);

        assert_eq!(config.access_token_expire_minutes, 15);
        assert_eq!(config.access_token_expire_seconds(), 900);
        assert_eq!(config.refresh_token_expire_days, 14);
        assert!(!config.is_using_default_secret());
    }
}
