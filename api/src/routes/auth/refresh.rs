use actix_web::{web, HttpResponse};

use crate::dto::auth::{RefreshTokenRequest, TokenResponse};
use crate::handlers::error::handle_domain_error;

use rc_core::repositories::{AuditLogRepository, RevocationStore, UserRepository};

use super::AppState;

/// Handler for POST /api/v1/auth/refresh
///
/// Exchanges a valid refresh token for a new access/refresh pair.
///
/// # Request Body
///
/// ```json
/// {
///     "refresh_token": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Invalid, expired or wrong-kind token; unknown or
///   inactive user
pub async fn refresh_token<U, R, A>(
    state: web::Data<AppState<U, R, A>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationStore + 'static,
    A: AuditLogRepository + 'static,
{
    match state.auth_service.refresh(&request.refresh_token).await {
        Ok((pair, _user)) => HttpResponse::Ok().json(TokenResponse::bearer(pair)),
        Err(error) => handle_domain_error(error),
    }
}
