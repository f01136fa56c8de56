use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::dto::auth::{LoginRequest, LoginResponse, OAuth2LoginForm, TokenResponse};
use crate::dto::ErrorResponse;
use crate::handlers::error::handle_domain_error;

use rc_core::repositories::{AuditLogRepository, RevocationStore, UserRepository};

use super::AppState;

/// Handler for POST /api/v1/auth/login
///
/// OAuth2-compatible form login: the `username` field carries the email.
/// Returns only the token pair (standard OAuth2 shape), so generic OAuth2
/// tooling can drive this endpoint.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "eyJ...",
///     "token_type": "bearer"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Unknown email or wrong password
/// - 403 Forbidden: Account disabled
pub async fn login_oauth2<U, R, A>(
    req: HttpRequest,
    state: web::Data<AppState<U, R, A>>,
    form: web::Form<OAuth2LoginForm>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationStore + 'static,
    A: AuditLogRepository + 'static,
{
    let ip_address = client_ip(&req);

    match state
        .auth_service
        .login(&form.username, &form.password, ip_address)
        .await
    {
        Ok((pair, _user)) => HttpResponse::Ok().json(TokenResponse::bearer(pair)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/auth/login-json
///
/// JSON login variant returning the token pair plus the identity snapshot.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "agent@recouvro.fr",
///     "password": "secret"
/// }
/// ```
pub async fn login_json<U, R, A>(
    req: HttpRequest,
    state: web::Data<AppState<U, R, A>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationStore + 'static,
    A: AuditLogRepository + 'static,
{
    if request.0.validate().is_err() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "validation_error",
            "Format d'email ou de mot de passe invalide",
        ));
    }

    let ip_address = client_ip(&req);

    match state
        .auth_service
        .login(&request.email, &request.password, ip_address)
        .await
    {
        Ok((pair, user)) => HttpResponse::Ok().json(LoginResponse::new(pair, &user)),
        Err(error) => handle_domain_error(error),
    }
}

/// Client IP for the audit trail, honoring reverse-proxy headers
fn client_ip(req: &HttpRequest) -> Option<String> {
    req.connection_info()
        .realip_remote_addr()
        .map(|addr| addr.to_string())
}
