//! Mock implementation of RevocationStore for testing

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::DomainError;

use super::r#trait::RevocationStore;

/// In-memory revocation store for testing
///
/// Mirrors the expiring-key semantics of the Redis-backed store and can
/// simulate outages per record family so both failure policies of the
/// authentication gate are exercisable.
pub struct MockRevocationStore {
    revoked: Arc<RwLock<HashMap<String, DateTime<Utc>>>>,
    cutoffs: Arc<RwLock<HashMap<i64, (f64, DateTime<Utc>)>>>,
    blacklist_available: AtomicBool,
    cutoff_available: AtomicBool,
}

impl MockRevocationStore {
    /// Create a new empty mock store
    pub fn new() -> Self {
        Self {
            revoked: Arc::new(RwLock::new(HashMap::new())),
            cutoffs: Arc::new(RwLock::new(HashMap::new())),
            blacklist_available: AtomicBool::new(true),
            cutoff_available: AtomicBool::new(true),
        }
    }

    /// Simulate blacklist record availability
    pub fn set_blacklist_available(&self, available: bool) {
        self.blacklist_available.store(available, Ordering::SeqCst);
    }

    /// Simulate cutoff record availability
    pub fn set_cutoff_available(&self, available: bool) {
        self.cutoff_available.store(available, Ordering::SeqCst);
    }

    /// Write a cutoff record with an explicit timestamp (tests only need
    /// deterministic logical times; the trait method always writes "now")
    pub async fn set_cutoff(&self, user_id: i64, cutoff_timestamp: i64) {
        let mut cutoffs = self.cutoffs.write().await;
        cutoffs.insert(
            user_id,
            (cutoff_timestamp as f64, Utc::now() + Duration::hours(1)),
        );
    }

    fn unavailable() -> DomainError {
        DomainError::StoreUnavailable {
            message: "connection refused".to_string(),
        }
    }
}

impl Default for MockRevocationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RevocationStore for MockRevocationStore {
    async fn revoke_token(&self, raw_token: &str, ttl_seconds: i64) -> Result<(), DomainError> {
        if !self.blacklist_available.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }

        // Already-expired token: nothing to record, the intended effect holds
        if ttl_seconds <= 0 {
            return Ok(());
        }

        let mut revoked = self.revoked.write().await;
        revoked.insert(
            raw_token.to_string(),
            Utc::now() + Duration::seconds(ttl_seconds),
        );
        Ok(())
    }

    async fn is_revoked(&self, raw_token: &str) -> Result<bool, DomainError> {
        if !self.blacklist_available.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }

        let revoked = self.revoked.read().await;
        Ok(revoked
            .get(raw_token)
            .map(|expires_at| *expires_at > Utc::now())
            .unwrap_or(false))
    }

    async fn revoke_all_for_user(
        &self,
        user_id: i64,
        ttl_seconds: i64,
    ) -> Result<(), DomainError> {
        if !self.cutoff_available.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }

        let now = Utc::now();
        // Sub-second cutoff so tokens issued earlier in the same second are
        // still caught by the strictly-greater comparison
        let cutoff = now.timestamp_millis() as f64 / 1000.0;
        let mut cutoffs = self.cutoffs.write().await;
        cutoffs.insert(
            user_id,
            (cutoff, now + Duration::seconds(ttl_seconds.max(0))),
        );
        Ok(())
    }

    async fn logged_out_since(
        &self,
        user_id: i64,
        token_issued_at: i64,
    ) -> Result<bool, DomainError> {
        if !self.cutoff_available.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }

        let cutoffs = self.cutoffs.read().await;
        Ok(cutoffs
            .get(&user_id)
            .map(|(cutoff, expires_at)| {
                *expires_at > Utc::now() && *cutoff > token_issued_at as f64
            })
            .unwrap_or(false))
    }
}
