//! Error type definitions for authentication and token operations
//!
//! Client-facing messages stay generic in the presentation layer: a failed
//! check must not reveal which gate rejected the request.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing credentials")]
    MissingCredentials,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account disabled")]
    AccountDisabled,

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Session expired")]
    SessionExpired,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token revoked")]
    TokenRevoked,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    #[test]
    fn test_auth_error_messages_stay_generic() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
        assert_eq!(AuthError::SessionExpired.to_string(), "Session expired");
    }

    #[test]
    fn test_domain_error_bridges() {
        let err: DomainError = TokenError::TokenRevoked.into();
        assert!(matches!(err, DomainError::Token(TokenError::TokenRevoked)));

        let err: DomainError = AuthError::AccountDisabled.into();
        assert!(matches!(err, DomainError::Auth(AuthError::AccountDisabled)));
    }
}
