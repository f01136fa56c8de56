//! Main token service implementation

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, TokenPair};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Service issuing and verifying signed, time-bounded tokens
///
/// Tokens are self-contained: any request-handling node holding the shared
/// secret can verify them without session state. The service never consults
/// the revocation store; `decode` only proves signature and expiry.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from its configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues an access token carrying the user's identity snapshot
    pub fn issue_access_token(&self, user: &User) -> DomainResult<String> {
        let claims = Claims::new_access(
            user,
            Utc::now(),
            Duration::minutes(self.config.access_token_expire_minutes),
        );
        self.encode_jwt(&claims)
    }

    /// Issues a refresh token carrying only the subject
    pub fn issue_refresh_token(&self, user_id: i64) -> DomainResult<String> {
        let claims = Claims::new_refresh(
            user_id,
            Utc::now(),
            Duration::days(self.config.refresh_token_expire_days),
        );
        self.encode_jwt(&claims)
    }

    /// Issues an access + refresh pair for the user
    pub fn issue_token_pair(&self, user: &User) -> DomainResult<TokenPair> {
        let access_token = self.issue_access_token(user)?;
        let refresh_token = self.issue_refresh_token(user.id)?;

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.access_token_ttl_seconds(),
        ))
    }

    /// Verifies signature and expiry, returning the claims
    pub fn decode(&self, token: &str) -> DomainResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        DomainError::Token(TokenError::TokenExpired)
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        DomainError::Token(TokenError::InvalidSignature)
                    }
                    _ => DomainError::Token(TokenError::InvalidTokenFormat),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Access-token validity window in seconds
    ///
    /// Also the lifetime of logout-all cutoff records: a token older than
    /// this window is already invalid by expiry.
    pub fn access_token_ttl_seconds(&self) -> i64 {
        self.config.access_token_expire_minutes * 60
    }

    /// Encodes claims into a signed JWT
    fn encode_jwt(&self, claims: &Claims) -> DomainResult<String> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }
}
