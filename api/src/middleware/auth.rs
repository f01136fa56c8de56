//! Bearer token extraction for protected endpoints.
//!
//! The extractor only pulls the raw token from the Authorization header; the
//! ordered authentication checks (revocation, decode, cutoff, user lookup)
//! run inside `AuthService::authenticate`, which handlers call explicitly.
//! A request without a bearer token is rejected before any handler runs.

use actix_web::error::InternalError;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{Error, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};

use rc_core::errors::AuthError;

use crate::dto::ErrorResponse;

/// Raw bearer token extracted from the Authorization header
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

/// Extracts the Bearer token from the Authorization header
fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

impl FromRequest for BearerToken {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = extract_bearer_token(req).map(BearerToken).ok_or_else(|| {
            let response = HttpResponse::Unauthorized().json(ErrorResponse::new(
                "unauthorized",
                "Authentification requise",
            ));
            InternalError::from_response(AuthError::MissingCredentials, response).into()
        });

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test as actix_test;

    #[test]
    fn test_extract_bearer_token() {
        let req = actix_test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_http_request();

        assert_eq!(
            extract_bearer_token(&req),
            Some("test_token_123".to_string())
        );

        let req_no_bearer = actix_test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_http_request();

        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_no_header = actix_test::TestRequest::default().to_http_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }
}
