//! Redis-backed revocation store
//!
//! Records revoked tokens and per-user logout cutoffs in Redis with
//! automatic expiration:
//!
//! - Key `blacklist:{token_digest}`, value `revoked`, TTL = remaining token
//!   lifetime
//! - Key `user_logout:{user_id}`, value = cutoff unix timestamp, TTL =
//!   access-token validity window
//!
//! Only the SHA-256 digest of a token is ever stored; revoked entries are
//! removed by Redis itself once the targeted token has expired.

use async_trait::async_trait;
use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::warn;

use rc_core::errors::DomainError;
use rc_core::repositories::RevocationStore;

use super::redis_client::RedisClient;

const BLACKLIST_KEY_PREFIX: &str = "blacklist";
const USER_LOGOUT_KEY_PREFIX: &str = "user_logout";
const REVOKED_SENTINEL: &str = "revoked";

/// Revocation store backed by the shared Redis instance
#[derive(Clone)]
pub struct RedisRevocationStore {
    client: RedisClient,
}

impl RedisRevocationStore {
    /// Create a new revocation store over an existing Redis client
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// SHA-256 hex digest of a raw token
    fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn blacklist_key(raw_token: &str) -> String {
        format!("{}:{}", BLACKLIST_KEY_PREFIX, Self::hash_token(raw_token))
    }

    fn user_logout_key(user_id: i64) -> String {
        format!("{}:{}", USER_LOGOUT_KEY_PREFIX, user_id)
    }

    fn store_unavailable(e: impl std::fmt::Display) -> DomainError {
        DomainError::StoreUnavailable {
            message: e.to_string(),
        }
    }
}

#[async_trait]
impl RevocationStore for RedisRevocationStore {
    async fn revoke_token(&self, raw_token: &str, ttl_seconds: i64) -> Result<(), DomainError> {
        // Already expired: the intended effect holds without a record
        if ttl_seconds <= 0 {
            return Ok(());
        }

        self.client
            .set_with_expiry(
                &Self::blacklist_key(raw_token),
                REVOKED_SENTINEL,
                ttl_seconds as u64,
            )
            .await
            .map_err(Self::store_unavailable)
    }

    async fn is_revoked(&self, raw_token: &str) -> Result<bool, DomainError> {
        self.client
            .exists(&Self::blacklist_key(raw_token))
            .await
            .map_err(Self::store_unavailable)
    }

    async fn revoke_all_for_user(
        &self,
        user_id: i64,
        ttl_seconds: i64,
    ) -> Result<(), DomainError> {
        // Sub-second cutoff so tokens issued earlier in the same second are
        // still caught by the strictly-greater comparison
        let cutoff = Utc::now().timestamp_millis() as f64 / 1000.0;

        self.client
            .set_with_expiry(
                &Self::user_logout_key(user_id),
                &cutoff.to_string(),
                ttl_seconds.max(1) as u64,
            )
            .await
            .map_err(Self::store_unavailable)
    }

    async fn logged_out_since(
        &self,
        user_id: i64,
        token_issued_at: i64,
    ) -> Result<bool, DomainError> {
        let value = self
            .client
            .get(&Self::user_logout_key(user_id))
            .await
            .map_err(Self::store_unavailable)?;

        match value {
            Some(raw) => match raw.parse::<f64>() {
                Ok(cutoff) => Ok(cutoff > token_issued_at as f64),
                Err(_) => {
                    warn!(user_id, "unparseable logout cutoff record: {}", raw);
                    Ok(false)
                }
            },
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_digest_is_deterministic_hex() {
        let digest = RedisRevocationStore::hash_token("eyJhbGciOi.header.payload");

        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(
            digest,
            RedisRevocationStore::hash_token("eyJhbGciOi.header.payload")
        );
        assert_ne!(digest, RedisRevocationStore::hash_token("other-token"));
    }

    #[test]
    fn test_blacklist_key_never_contains_raw_token() {
        let raw = "eyJhbGciOiJIUzI1NiJ9.secret-payload.signature";
        let key = RedisRevocationStore::blacklist_key(raw);

        assert!(key.starts_with("blacklist:"));
        assert!(!key.contains("secret-payload"));
    }

    #[test]
    fn test_user_logout_key_format() {
        assert_eq!(RedisRevocationStore::user_logout_key(7), "user_logout:7");
    }
}
