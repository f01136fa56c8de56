use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};
use std::sync::Arc;

mod dto;
mod handlers;
mod middleware;
mod routes;

use rc_core::services::audit::{AuditService, AuditServiceConfig};
use rc_core::services::auth::AuthService;
use rc_core::services::token::{TokenService, TokenServiceConfig};
use rc_infra::cache::{RedisClient, RedisRevocationStore};
use rc_infra::database::{create_pool, PgAuditLogRepository, PgUserRepository};
use rc_shared::config::{CacheConfig, DatabaseConfig, JwtConfig, ServerConfig};

use routes::auth::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Recouvro API Server");

    // Load configuration from the environment
    let server_config = ServerConfig::from_env();
    let jwt_config = JwtConfig::from_env();
    let cache_config = CacheConfig::from_env();
    let database_config = DatabaseConfig::from_env();

    if jwt_config.is_using_default_secret() {
        warn!("SECRET_KEY is not set; using the default development secret");
    }

    // Backing stores
    let redis_client = RedisClient::new(cache_config)
        .await
        .map_err(into_io_error)?;
    if !redis_client.health_check().await.unwrap_or(false) {
        warn!("Revocation store did not answer PING; requests will fail closed");
    }
    let pool = create_pool(&database_config).await.map_err(into_io_error)?;

    // Service graph, constructed once and shared read-only across workers
    let token_config =
        TokenServiceConfig::from_jwt_config(&jwt_config).map_err(into_io_error)?;
    let token_service = Arc::new(TokenService::new(token_config));
    let revocation_store = Arc::new(RedisRevocationStore::new(redis_client));
    let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
    let audit_repository = Arc::new(PgAuditLogRepository::new(pool));
    let audit_service = Arc::new(AuditService::new(
        audit_repository,
        AuditServiceConfig::default(),
    ));
    let auth_service = Arc::new(AuthService::with_audit(
        user_repository,
        revocation_store,
        token_service,
        audit_service,
    ));

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || {
        let cors = middleware::cors::create_cors(&server_config);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(AppState {
                auth_service: Arc::clone(&auth_service),
            }))
            // Health check endpoint
            .route("/health", web::get().to(health_check))
            // API v1 routes
            .service(web::scope("/api/v1").configure(
                routes::auth::configure::<
                    PgUserRepository,
                    RedisRevocationStore,
                    PgAuditLogRepository,
                >,
            ))
            // Default 404 handler
            .default_service(web::route().to(not_found))
    })
    .bind(&bind_address)?
    .run()
    .await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "recouvro-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}

fn into_io_error(e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
}
