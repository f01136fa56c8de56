//! Revocation store trait defining the interface for token invalidation.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Expiring key-value store recording revoked tokens and per-user logout
/// cutoffs.
///
/// Implementations never persist raw tokens: entries are keyed by a
/// collision-resistant digest of the token string. Entry lifetimes are always
/// derived from the targeted token's remaining validity, so the store's
/// growth is bounded by recently issued tokens that were explicitly revoked.
///
/// Methods return `Err` when the backing store is unreachable; the caller
/// decides the failure policy (the authentication gate treats a failed
/// blacklist check as revoked and a failed cutoff check as not logged out).
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// Revoke a single token for the remainder of its lifetime
    ///
    /// `ttl_seconds` must equal the token's remaining validity. A TTL of zero
    /// or less means the token is already unusable by expiry: the call writes
    /// nothing and still reports success.
    async fn revoke_token(&self, raw_token: &str, ttl_seconds: i64) -> Result<(), DomainError>;

    /// Check whether a token has been individually revoked
    async fn is_revoked(&self, raw_token: &str) -> Result<bool, DomainError>;

    /// Record a logout-all cutoff of "now" for the user
    ///
    /// `ttl_seconds` should equal the access-token validity window: any token
    /// older than that window is already invalid by expiry, so the cutoff
    /// record need not outlive it.
    async fn revoke_all_for_user(&self, user_id: i64, ttl_seconds: i64) -> Result<(), DomainError>;

    /// Check whether the user requested a global logout after the token was
    /// issued
    ///
    /// Returns true iff a cutoff record exists and its timestamp is strictly
    /// greater than `token_issued_at`.
    async fn logged_out_since(
        &self,
        user_id: i64,
        token_issued_at: i64,
    ) -> Result<bool, DomainError>;
}
