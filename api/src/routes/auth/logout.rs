use actix_web::{web, HttpResponse};

use crate::dto::auth::LogoutResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::BearerToken;

use rc_core::repositories::{AuditLogRepository, RevocationStore, UserRepository};

use super::AppState;

/// Handler for POST /api/v1/auth/logout
///
/// Revokes the presented access token for the remainder of its lifetime.
/// The caller must be authenticated; once authenticated, logout always
/// succeeds, even when the revocation record could not be written.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {access_token}
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Déconnexion réussie",
///     "detail": "Votre token a été révoqué"
/// }
/// ```
pub async fn logout<U, R, A>(
    state: web::Data<AppState<U, R, A>>,
    token: BearerToken,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationStore + 'static,
    A: AuditLogRepository + 'static,
{
    let user = match state.auth_service.authenticate(&token.0).await {
        Ok(user) => user,
        Err(error) => return handle_domain_error(error),
    };

    match state.auth_service.logout(&token.0, &user).await {
        Ok(()) => HttpResponse::Ok().json(LogoutResponse {
            message: "Déconnexion réussie".to_string(),
            detail: Some("Votre token a été révoqué".to_string()),
        }),
        Err(error) => handle_domain_error(error),
    }
}
