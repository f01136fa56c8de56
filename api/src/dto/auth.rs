use serde::{Deserialize, Serialize};
use validator::Validate;

use rc_core::domain::entities::token::TokenPair;
use rc_core::domain::entities::user::{Role, User};

/// JSON login request body
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// OAuth2-style form login (the username field carries the email)
#[derive(Debug, Clone, Deserialize)]
pub struct OAuth2LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// OAuth2-compatible token pair response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

impl TokenResponse {
    /// Wrap an issued pair as a bearer token response
    pub fn bearer(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Identity snapshot returned by login-json and /me
///
/// Field names follow the established wire format of the collection
/// platform's clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id_utilisateur: i64,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub role: Role,
    pub id_agence: Option<i64>,
    pub actif: bool,
}

impl UserProfile {
    pub fn from_user(user: &User) -> Self {
        Self {
            id_utilisateur: user.id,
            nom: user.last_name.clone(),
            prenom: user.first_name.clone(),
            email: user.email.clone(),
            role: user.role,
            id_agence: user.agency_id,
            actif: user.is_active,
        }
    }
}

/// Login response carrying tokens plus the identity snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub user: UserProfile,
}

impl LoginResponse {
    pub fn new(pair: TokenPair, user: &User) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: "bearer".to_string(),
            user: UserProfile::from_user(user),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
