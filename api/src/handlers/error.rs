//! Mapping of domain errors to HTTP responses.
//!
//! Client-facing messages stay generic: a rejected request must not reveal
//! which gate failed, and login must not distinguish unknown emails from
//! wrong passwords.

use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;

use rc_core::errors::{AuthError, DomainError, TokenError};

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Convert a domain error into the appropriate HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::MissingCredentials => {
                unauthorized("Authentification requise")
            }
            AuthError::InvalidCredentials => {
                unauthorized("Email ou mot de passe incorrect")
            }
            AuthError::AuthenticationFailed => {
                unauthorized("Impossible de valider les credentials")
            }
            AuthError::SessionExpired => {
                unauthorized("Session expirée. Veuillez vous reconnecter.")
            }
            AuthError::AccountDisabled => ErrorResponse::new(
                "forbidden",
                "Compte désactivé. Contactez l'administrateur.",
            )
            .to_response(StatusCode::FORBIDDEN),
        },
        DomainError::Token(token_error) => {
            log::debug!("Token rejected: {:?}", token_error);
            match token_error {
                TokenError::TokenRevoked => {
                    unauthorized("Token révoqué. Veuillez vous reconnecter.")
                }
                _ => unauthorized("Token invalide ou expiré"),
            }
        }
        DomainError::StoreUnavailable { message } => {
            log::error!("Revocation store unavailable: {}", message);
            ErrorResponse::new("internal_error", "Erreur lors de la révocation des tokens")
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
        other => {
            log::error!("Internal error: {:?}", other);
            ErrorResponse::new("internal_error", "Une erreur interne est survenue")
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// 401 with the WWW-Authenticate challenge expected by bearer-token clients
fn unauthorized(message: &str) -> HttpResponse {
    HttpResponse::Unauthorized()
        .insert_header((header::WWW_AUTHENTICATE, "Bearer"))
        .json(ErrorResponse::new("unauthorized", message))
}
