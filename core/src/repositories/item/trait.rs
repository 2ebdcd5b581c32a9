//! Item repository trait defining the interface for item persistence.
//!
//! Listings are ordered newest first, ties broken by descending id, and
//! always carry the owner's name and email.

use async_trait::async_trait;
use lf_shared::PageRequest;
use uuid::Uuid;

use crate::domain::entities::item::{Item, ItemWithOwner};
use crate::errors::DomainError;

/// Repository trait for Item entity persistence operations
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Persist a new item
    ///
    /// # Errors
    /// * `DomainError::NotFound` - `posted_by_id` does not name an existing user
    async fn create(&self, item: Item) -> Result<Item, DomainError>;

    /// The `limit` most recently created items
    async fn list_recent(&self, limit: u32) -> Result<Vec<ItemWithOwner>, DomainError>;

    /// One page of items, optionally restricted to a single owner
    async fn list_page(
        &self,
        owner: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Vec<ItemWithOwner>, DomainError>;

    /// Number of items, optionally restricted to a single owner
    async fn count(&self, owner: Option<Uuid>) -> Result<u64, DomainError>;
}
