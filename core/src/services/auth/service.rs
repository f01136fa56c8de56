//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::token::{TokenKind, TokenPair};
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainResult, TokenError};
use crate::repositories::{
    AuditLogRepository, NoOpAuditLogRepository, RevocationStore, UserRepository,
};
use crate::services::audit::AuditService;
use crate::services::password::verify_password;
use crate::services::token::TokenService;

/// Authentication service composing the token codec, the revocation store
/// and user lookup
///
/// The revocation store is the only point of cross-request coordination;
/// everything else here is stateless per request.
pub struct AuthService<U, R, A = NoOpAuditLogRepository>
where
    U: UserRepository,
    R: RevocationStore,
    A: AuditLogRepository + 'static,
{
    /// User repository for identity lookup
    user_repository: Arc<U>,
    /// Expiring store for blacklist and logout-all records
    revocation_store: Arc<R>,
    /// Stateless token codec
    token_service: Arc<TokenService>,
    /// Optional audit service for recording session events
    audit_service: Option<Arc<AuditService<A>>>,
}

impl<U, R, A> AuthService<U, R, A>
where
    U: UserRepository,
    R: RevocationStore,
    A: AuditLogRepository + 'static,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        revocation_store: Arc<R>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            user_repository,
            revocation_store,
            token_service,
            audit_service: None,
        }
    }

    /// Create a new authentication service with audit logging
    pub fn with_audit(
        user_repository: Arc<U>,
        revocation_store: Arc<R>,
        token_service: Arc<TokenService>,
        audit_service: Arc<AuditService<A>>,
    ) -> Self {
        Self {
            user_repository,
            revocation_store,
            token_service,
            audit_service: Some(audit_service),
        }
    }

    /// Authenticate credentials and issue a token pair
    ///
    /// Unknown email and wrong password are indistinguishable to the caller;
    /// a deactivated account is reported separately only after the password
    /// matched.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        ip_address: Option<String>,
    ) -> DomainResult<(TokenPair, User)> {
        let user = match self.user_repository.find_by_email(email).await? {
            Some(user) if verify_password(password, &user.password_hash) => user,
            _ => {
                if let Some(ref audit) = self.audit_service {
                    let _ = audit.log_login(None, email, false, ip_address).await;
                }
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !user.is_active {
            if let Some(ref audit) = self.audit_service {
                let _ = audit.log_login(Some(user.id), email, false, ip_address).await;
            }
            return Err(AuthError::AccountDisabled.into());
        }

        let pair = self.token_service.issue_token_pair(&user)?;

        if let Some(ref audit) = self.audit_service {
            let _ = audit.log_login(Some(user.id), email, true, ip_address).await;
        }

        tracing::info!(user_id = user.id, "user logged in");
        Ok((pair, user))
    }

    /// Per-request authentication gate
    ///
    /// Ordered hard gates; every step either passes or rejects the request:
    /// 1. blacklist check, before decode (a store outage counts as revoked)
    /// 2. signature/expiry verification
    /// 3. kind and subject checks
    /// 4. logout-all cutoff check (fail-open: an unreachable store reads as
    ///    "not logged out")
    /// 5. identity lookup
    /// 6. active-account check
    pub async fn authenticate(&self, raw_token: &str) -> DomainResult<User> {
        if self
            .revocation_store
            .is_revoked(raw_token)
            .await
            .unwrap_or(true)
        {
            return Err(TokenError::TokenRevoked.into());
        }

        let claims = self.token_service.decode(raw_token)?;

        if claims.kind != TokenKind::Access {
            return Err(TokenError::InvalidClaims.into());
        }
        let user_id = claims
            .user_id()
            .map_err(|_| TokenError::InvalidClaims)?;

        if self
            .revocation_store
            .logged_out_since(user_id, claims.iat)
            .await
            .unwrap_or(false)
        {
            return Err(AuthError::SessionExpired.into());
        }

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::AuthenticationFailed)?;

        if !user.is_active {
            return Err(AuthError::AccountDisabled.into());
        }

        Ok(user)
    }

    /// Exchange a refresh token for a new pair
    ///
    /// Validates signature, expiry, kind and account state. The blacklist
    /// and the logout-all cutoff are not consulted on this path (source
    /// behavior; see DESIGN.md).
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<(TokenPair, User)> {
        let claims = self.token_service.decode(refresh_token)?;

        if claims.kind != TokenKind::Refresh {
            return Err(TokenError::InvalidClaims.into());
        }
        let user_id = claims
            .user_id()
            .map_err(|_| TokenError::InvalidClaims)?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .filter(|u| u.is_active)
            .ok_or(AuthError::AuthenticationFailed)?;

        let pair = self.token_service.issue_token_pair(&user)?;

        if let Some(ref audit) = self.audit_service {
            let _ = audit.log_token_refreshed(user.id).await;
        }

        Ok((pair, user))
    }

    /// Revoke the presented access token for the rest of its lifetime
    ///
    /// Always reports success: once the caller discards the token, logout
    /// has effectively happened client-side.
    pub async fn logout(&self, raw_token: &str, user: &User) -> DomainResult<()> {
        if let Ok(claims) = self.token_service.decode(raw_token) {
            let remaining = claims.remaining_seconds();
            if let Err(e) = self.revocation_store.revoke_token(raw_token, remaining).await {
                tracing::warn!(user_id = user.id, "token revocation failed during logout: {}", e);
            }
        }

        if let Some(ref audit) = self.audit_service {
            let _ = audit.log_logout(user.id, &user.email).await;
        }

        tracing::info!(user_id = user.id, "user logged out");
        Ok(())
    }

    /// Invalidate every token issued to the user before now
    ///
    /// Unlike single logout, a store failure here is surfaced: the caller
    /// asked for a security-relevant global effect and must know it did not
    /// take hold.
    pub async fn logout_all(&self, user: &User) -> DomainResult<()> {
        let window = self.token_service.access_token_ttl_seconds();
        self.revocation_store
            .revoke_all_for_user(user.id, window)
            .await?;

        if let Some(ref audit) = self.audit_service {
            let _ = audit.log_logout_all(user.id, &user.email).await;
        }

        tracing::info!(user_id = user.id, "user logged out from all devices");
        Ok(())
    }
}
