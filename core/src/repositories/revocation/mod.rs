//! Revocation store module.
//!
//! The store records which tokens have been individually revoked and which
//! users have requested a global logout. Records are intentionally ephemeral:
//! losing them degrades the system to "no manually revoked tokens", never to
//! corruption.

mod r#trait;
pub use r#trait::RevocationStore;

mod mock;
pub use mock::MockRevocationStore;

#[cfg(test)]
mod tests;
