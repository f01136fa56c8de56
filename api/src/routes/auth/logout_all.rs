use actix_web::{web, HttpResponse};

use crate::dto::auth::LogoutResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::BearerToken;

use rc_core::repositories::{AuditLogRepository, RevocationStore, UserRepository};

use super::AppState;

/// Handler for POST /api/v1/auth/logout-all
///
/// Writes the user's logout-all cutoff: every token issued before this
/// moment is rejected until it would have expired anyway. Unlike single
/// logout, a store failure is surfaced as 500 so the caller knows the
/// global effect did not take hold.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {access_token}
/// ```
pub async fn logout_all<U, R, A>(
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

    match state.auth_service.logout_all(&user).await {
        Ok(()) => HttpResponse::Ok().json(LogoutResponse {
            message: "Déconnexion réussie sur tous les appareils".to_string(),
            detail: Some("Tous vos tokens ont été révoqués".to_string()),
        }),
        Err(error) => handle_domain_error(error),
    }
}
