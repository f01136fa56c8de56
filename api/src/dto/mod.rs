//! Request and response data transfer objects.

pub mod auth;
pub mod error;

pub use error::{ErrorResponse, ErrorResponseExt};
