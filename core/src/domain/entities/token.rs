//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::user::{Role, User};

/// Kind of a signed token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Short-lived token presented on every request
    Access,
    /// Long-lived token exchanged for new pairs
    Refresh,
}

impl TokenKind {
    /// String representation used in the `type` claim
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Refresh => "refresh",
        }
    }
}

/// Claims structure for the JWT payload
///
/// Access tokens carry the full identity snapshot so that authenticated
/// requests need no database round trip for identity data; refresh tokens
/// carry only the subject. The subject is always serialized as a string:
/// signature libraries require string subjects regardless of the numeric
/// form of the user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id, string-encoded)
    pub sub: String,

    /// Login email (access tokens only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// User role (access tokens only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    /// Agency id (access tokens only, nullable even there)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agence_id: Option<i64>,

    /// Issued at (unix seconds)
    pub iat: i64,

    /// Expiration (unix seconds)
    pub exp: i64,

    /// Token kind
    #[serde(rename = "type")]
    pub kind: TokenKind,
}

impl Claims {
    /// Creates claims for an access token carrying the identity snapshot
    pub fn new_access(user: &User, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: user.id.to_string(),
            email: Some(user.email.clone()),
            role: Some(user.role),
            agence_id: user.agency_id,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            kind: TokenKind::Access,
        }
    }

    /// Creates claims for a refresh token (subject only)
    pub fn new_refresh(user_id: i64, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: user_id.to_string(),
            email: None,
            role: None,
            agence_id: None,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            kind: TokenKind::Refresh,
        }
    }

    /// Gets the numeric user id from the subject claim
    pub fn user_id(&self) -> Result<i64, std::num::ParseIntError> {
        self.sub.parse()
    }

    /// Checks whether the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Seconds of validity left; negative once expired
    pub fn remaining_seconds(&self) -> i64 {
        self.exp - Utc::now().timestamp()
    }
}

/// Token pair returned to the client after login or refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token validity in seconds
    pub expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_in,
        }
    }
}
