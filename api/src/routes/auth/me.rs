use actix_web::{web, HttpResponse};

use crate::dto::auth::UserProfile;
use crate::handlers::error::handle_domain_error;
use crate::middleware::BearerToken;

use rc_core::repositories::{AuditLogRepository, RevocationStore, UserRepository};

use super::AppState;

/// Handler for GET /api/v1/auth/me
///
/// Returns the identity snapshot of the authenticated user.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {access_token}
/// ```
pub async fn me<U, R, A>(
    state: web::Data<AppState<U, R, A>>,
    token: BearerToken,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationStore + 'static,
    A: AuditLogRepository + 'static,
{
    match state.auth_service.authenticate(&token.0).await {
        Ok(user) => HttpResponse::Ok().json(UserProfile::from_user(&user)),
        Err(error) => handle_domain_error(error),
    }
}
