//! CORS middleware configuration for cross-origin requests.
//!
//! The configuration is environment-aware: development allows any origin
//! for easier testing, production restricts origins to the configured
//! front-end domains.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use rc_shared::config::{Environment, ServerConfig};

/// Creates a CORS middleware instance configured for the current environment.
///
/// # Environment Variables
/// - `ENVIRONMENT`: Set to "production" for production settings
/// - `ALLOWED_ORIGINS`: Comma-separated list of allowed origins
pub fn create_cors(server_config: &ServerConfig) -> Cors {
    if Environment::from_env().is_production() {
        create_production_cors(server_config)
    } else {
        create_development_cors()
    }
}

/// Permissive CORS for development: any origin, standard methods
fn create_development_cors() -> Cors {
    log::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(3600)
}

/// Restrictive CORS for production: configured origins only
fn create_production_cors(server_config: &ServerConfig) -> Cors {
    log::info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
        .supports_credentials();

    for origin in &server_config.allowed_origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_cors_with_origins() {
        let config = ServerConfig {
            allowed_origins: vec!["https://app.recouvro.fr".to_string()],
            ..ServerConfig::default()
        };
        let _cors = create_cors(&config);
        // CORS configuration is created successfully
    }
}
