//! HTTP middleware and request extractors.

pub mod auth;
pub mod cors;

pub use auth::BearerToken;
