//! PostgreSQL repository implementations.

mod audit_repository_impl;
mod user_repository_impl;

pub use audit_repository_impl::PgAuditLogRepository;
pub use user_repository_impl::PgUserRepository;
