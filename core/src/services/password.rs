//! Password hashing and verification.
//!
//! Digests are bcrypt and therefore self-describing: the algorithm
//! identifier, cost factor and salt are embedded in the output, so stored
//! hashes can be re-hashed under a different policy later without a schema
//! change.

use crate::errors::{DomainError, DomainResult};

/// Produce a salted one-way hash of a password
pub fn hash_password(password: &str) -> DomainResult<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| DomainError::Internal {
        message: format!("Password hashing failed: {}", e),
    })
}

/// Check a password against a stored digest
///
/// A malformed digest is a verification failure, never an error: login must
/// not behave differently for corrupt rows than for wrong passwords.
pub fn verify_password(password: &str, digest: &str) -> bool {
    bcrypt::verify(password, digest).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let digest = hash_password("secret").unwrap();

        assert!(digest.starts_with("$2"));
        assert!(verify_password("secret", &digest));
        assert!(!verify_password("wrong", &digest));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("secret").unwrap();
        let second = hash_password("secret").unwrap();

        assert_ne!(first, second);
        assert!(verify_password("secret", &first));
        assert!(verify_password("secret", &second));
    }

    #[test]
    fn test_malformed_digest_verifies_false() {
        assert!(!verify_password("secret", "not-a-bcrypt-digest"));
        assert!(!verify_password("secret", ""));
    }
}
