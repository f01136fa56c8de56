//! Authentication route handlers
//!
//! This module contains the session endpoints:
//! - Login (OAuth2 form and JSON variants)
//! - Token refresh
//! - Identity snapshot (/me)
//! - Logout and logout from all devices

pub mod login;
pub mod logout;
pub mod logout_all;
pub mod me;
pub mod refresh;

use std::sync::Arc;

use actix_web::web;

use rc_core::repositories::{
    AuditLogRepository, NoOpAuditLogRepository, RevocationStore, UserRepository,
};
use rc_core::services::auth::AuthService;

/// Application state that holds the shared authentication service
pub struct AppState<U, R, A = NoOpAuditLogRepository>
where
    U: UserRepository,
    R: RevocationStore,
    A: AuditLogRepository + 'static,
{
    pub auth_service: Arc<AuthService<U, R, A>>,
}

/// Register the authentication endpoints under `/auth`
pub fn configure<U, R, A>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    R: RevocationStore + 'static,
    A: AuditLogRepository + 'static,
{
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(login::login_oauth2::<U, R, A>))
            .route("/login-json", web::post().to(login::login_json::<U, R, A>))
            .route("/refresh", web::post().to(refresh::refresh_token::<U, R, A>))
            .route("/me", web::get().to(me::me::<U, R, A>))
            .route("/logout", web::post().to(logout::logout::<U, R, A>))
            .route("/logout-all", web::post().to(logout_all::logout_all::<U, R, A>)),
    );
}
