//! User repository trait defining the interface for user lookup.
//!
//! The authentication core only identifies users; account management is the
//! business of the surrounding CRUD layer. The trait is therefore limited to
//! the two lookups the login path and the authentication gate need.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity lookup operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their login email
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with this email
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given id
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;
}
