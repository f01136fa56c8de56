pub mod audit;
pub mod revocation;
pub mod user;

pub use audit::{AuditLogRepository, MockAuditLogRepository, NoOpAuditLogRepository};
pub use revocation::{MockRevocationStore, RevocationStore};
pub use user::{MockUserRepository, UserRepository};
