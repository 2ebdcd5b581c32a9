//! In-memory implementation of UserRepository
//!
//! Used by the unit tests, the API integration tests and local runs without
//! a database.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::item::OwnerSummary;
use crate::domain::entities::user::{OneTimeCode, User};
use crate::errors::{AuthError, DomainError};

use super::trait_::UserRepository;

/// Mock user repository for testing
#[derive(Clone)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Check if the repository is empty
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    /// Owner details for listings, if the user exists
    pub async fn owner_summary(&self, id: Uuid) -> Option<OwnerSummary> {
        self.users.read().await.get(&id).map(|u| OwnerSummary {
            name: u.name.clone(),
            email: u.email.clone(),
        })
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(AuthError::UserAlreadyExists.into());
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn set_otp(&self, user_id: Uuid, otp: OneTimeCode) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&user_id).ok_or_else(|| DomainError::NotFound {
            resource: "User".to_string(),
        })?;
        user.set_otp(otp.code, otp.expires_at);
        Ok(())
    }

    async fn mark_verified(&self, user_id: Uuid) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&user_id).ok_or_else(|| DomainError::NotFound {
            resource: "User".to_string(),
        })?;
        user.verify();
        Ok(())
    }
}
