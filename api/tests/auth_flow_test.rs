//! End-to-end tests for the session endpoints, running the real routes
//! against in-memory repositories.

use actix_web::{test, web, App};
use std::sync::Arc;

use rc_api::dto::auth::{LoginResponse, TokenResponse, UserProfile};
use rc_api::routes::auth::{configure, AppState};
use rc_core::domain::entities::user::{Role, User};
use rc_core::repositories::{
    MockRevocationStore, MockUserRepository, NoOpAuditLogRepository,
};
use rc_core::services::auth::AuthService;
use rc_core::services::password::hash_password;
use rc_core::services::token::{TokenService, TokenServiceConfig};

struct TestContext {
    state: web::Data<AppState<MockUserRepository, MockRevocationStore>>,
}

async fn test_context() -> TestContext {
    let users = Arc::new(MockUserRepository::new());
    let store = Arc::new(MockRevocationStore::new());
    let tokens = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        ..Default::default()
    }));

    users
        .insert(
            User::new(
                7,
                "Marie",
                "Dupont",
                "a@b.com",
                hash_password("secret").unwrap(),
                Role::Agent,
            )
            .with_agency(3),
        )
        .await;

    let mut disabled = User::new(
        8,
        "Jean",
        "Petit",
        "jean@b.com",
        hash_password("secret").unwrap(),
        Role::ChefAgence,
    );
    disabled.deactivate();
    users.insert(disabled).await;

    let auth_service = Arc::new(AuthService::new(users, store, tokens));

    TestContext {
        state: web::Data::new(AppState { auth_service }),
    }
}

macro_rules! test_app {
    ($ctx:expr) => {
        test::init_service(
            App::new().app_data($ctx.state.clone()).service(
                web::scope("/api/v1").configure(configure::<
                    MockUserRepository,
                    MockRevocationStore,
                    NoOpAuditLogRepository,
                >),
            ),
        )
        .await
    };
}

macro_rules! login {
    ($app:expr, $email:expr, $password:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_form([("username", $email), ("password", $password)])
            .to_request();
        let tokens: TokenResponse = test::call_and_read_body_json(&$app, req).await;
        tokens
    }};
}

#[actix_web::test]
async fn test_form_login_returns_bearer_pair() {
    let ctx = test_context().await;
    let app = test_app!(ctx);

    let tokens = login!(app, "a@b.com", "secret");

    assert_eq!(tokens.token_type, "bearer");
    assert!(!tokens.access_token.is_empty());
    assert!(!tokens.refresh_token.is_empty());
    assert_ne!(tokens.access_token, tokens.refresh_token);
}

#[actix_web::test]
async fn test_login_rejects_bad_credentials() {
    let ctx = test_context().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_form([("username", "a@b.com"), ("password", "wrong")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_form([("username", "nobody@b.com"), ("password", "secret")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_login_rejects_disabled_account() {
    let ctx = test_context().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_form([("username", "jean@b.com"), ("password", "secret")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 403);
}

#[actix_web::test]
async fn test_json_login_returns_identity_snapshot() {
    let ctx = test_context().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login-json")
        .set_json(serde_json::json!({"email": "a@b.com", "password": "secret"}))
        .to_request();
    let body: LoginResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.token_type, "bearer");
    assert_eq!(body.user.id_utilisateur, 7);
    assert_eq!(body.user.email, "a@b.com");
    assert_eq!(body.user.id_agence, Some(3));
    assert!(body.user.actif);
}

#[actix_web::test]
async fn test_json_login_validates_email_format() {
    let ctx = test_context().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login-json")
        .set_json(serde_json::json!({"email": "not-an-email", "password": "secret"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_me_requires_bearer_token() {
    let ctx = test_context().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::get().uri("/api/v1/auth/me").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(("Authorization", "Bearer garbage"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_me_returns_profile() {
    let ctx = test_context().await;
    let app = test_app!(ctx);
    let tokens = login!(app, "a@b.com", "secret");

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(("Authorization", format!("Bearer {}", tokens.access_token)))
        .to_request();
    let profile: UserProfile = test::call_and_read_body_json(&app, req).await;

    assert_eq!(profile.id_utilisateur, 7);
    assert_eq!(profile.nom, "Dupont");
    assert_eq!(profile.prenom, "Marie");
}

#[actix_web::test]
async fn test_logout_revokes_current_token() {
    let ctx = test_context().await;
    let app = test_app!(ctx);
    let tokens = login!(app, "a@b.com", "secret");
    let auth_header = format!("Bearer {}", tokens.access_token);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/logout")
        .insert_header(("Authorization", auth_header.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    // The revoked token no longer authenticates
    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(("Authorization", auth_header.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    // And stays rejected: the gate reports it revoked, not merely invalid
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/logout")
        .insert_header(("Authorization", auth_header))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_logout_all_invalidates_previous_tokens() {
    let ctx = test_context().await;
    let app = test_app!(ctx);
    let tokens = login!(app, "a@b.com", "secret");
    let auth_header = format!("Bearer {}", tokens.access_token);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/logout-all")
        .insert_header(("Authorization", auth_header.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    // The pre-cutoff token is rejected
    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(("Authorization", auth_header))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    // A token issued after the cutoff is accepted again
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
    let new_tokens = login!(app, "a@b.com", "secret");
    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header((
            "Authorization",
            format!("Bearer {}", new_tokens.access_token),
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_refresh_returns_new_pair() {
    let ctx = test_context().await;
    let app = test_app!(ctx);
    let tokens = login!(app, "a@b.com", "secret");

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/refresh")
        .set_json(serde_json::json!({"refresh_token": tokens.refresh_token}))
        .to_request();
    let refreshed: TokenResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(refreshed.token_type, "bearer");
    assert!(!refreshed.access_token.is_empty());

    // The new access token authenticates
    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header((
            "Authorization",
            format!("Bearer {}", refreshed.access_token),
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_refresh_rejects_access_token() {
    let ctx = test_context().await;
    let app = test_app!(ctx);
    let tokens = login!(app, "a@b.com", "secret");

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/refresh")
        .set_json(serde_json::json!({"refresh_token": tokens.access_token}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_refresh_is_not_gated_by_single_logout() {
    let ctx = test_context().await;
    let app = test_app!(ctx);
    let tokens = login!(app, "a@b.com", "secret");

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/logout")
        .insert_header(("Authorization", format!("Bearer {}", tokens.access_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    // The refresh path does not consult the blacklist: the refresh token
    // still mints a new pair after logout
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/refresh")
        .set_json(serde_json::json!({"refresh_token": tokens.refresh_token}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}
