//! User repository trait defining the interface for user data persistence.
//!
//! The OTP operations are targeted updates: they touch only the OTP and
//! verification state of one row, so concurrent logins for the same user
//! resolve as last-write-wins instead of overwriting whole records.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::{OneTimeCode, User};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by exact email
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with that email
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Persist a new user
    ///
    /// # Errors
    /// * `AuthError::UserAlreadyExists` - the email is already taken
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Store a fresh one-time code for the user, replacing any previous one
    ///
    /// # Errors
    /// * `DomainError::NotFound` - no user with that id
    async fn set_otp(&self, user_id: Uuid, otp: OneTimeCode) -> Result<(), DomainError>;

    /// Clear the one-time code and mark the user as verified
    ///
    /// # Errors
    /// * `DomainError::NotFound` - no user with that id
    async fn mark_verified(&self, user_id: Uuid) -> Result<(), DomainError>;
}
