//! Audit service module
//!
//! Best-effort recording of authentication events. Audit writes commit only
//! after the gating decision and never fail the parent operation.

mod service;

pub use service::{AuditService, AuditServiceConfig};
