//! In-memory implementation of ItemRepository

use async_trait::async_trait;
use lf_shared::PageRequest;
use std::cmp::Reverse;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::item::{Item, ItemWithOwner};
use crate::errors::DomainError;
use crate::repositories::user::MockUserRepository;

use super::trait_::ItemRepository;

/// Mock item repository for testing
///
/// Shares the user store so owners can be checked on insert and joined into
/// listings.
pub struct MockItemRepository {
    items: Arc<RwLock<Vec<Item>>>,
    users: MockUserRepository,
    fail_on_create: AtomicBool,
}

impl MockItemRepository {
    /// Create a new mock repository backed by the given user store
    pub fn new(users: MockUserRepository) -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
            users,
            fail_on_create: AtomicBool::new(false),
        }
    }

    /// Make subsequent inserts fail with an internal error
    pub fn set_fail_on_create(&self, fail: bool) {
        self.fail_on_create.store(fail, Ordering::SeqCst);
    }

    /// Number of stored items
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Check if the repository is empty
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    async fn join_owners(&self, items: Vec<Item>) -> Vec<ItemWithOwner> {
        let mut joined = Vec::with_capacity(items.len());
        for item in items {
            if let Some(posted_by) = self.users.owner_summary(item.posted_by_id).await {
                joined.push(ItemWithOwner { item, posted_by });
            }
        }
        joined
    }

    async fn sorted(&self, owner: Option<Uuid>) -> Vec<Item> {
        let items = self.items.read().await;
        let mut selected: Vec<Item> = items
            .iter()
            .filter(|i| owner.map_or(true, |o| i.posted_by_id == o))
            .cloned()
            .collect();
        selected.sort_by_key(|i| Reverse((i.created_at, i.id)));
        selected
    }
}

#[async_trait]
impl ItemRepository for MockItemRepository {
    async fn create(&self, item: Item) -> Result<Item, DomainError> {
        if self.fail_on_create.load(Ordering::SeqCst) {
            return Err(DomainError::internal("simulated storage failure"));
        }

        if self.users.owner_summary(item.posted_by_id).await.is_none() {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }

        self.items.write().await.push(item.clone());
        Ok(item)
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<ItemWithOwner>, DomainError> {
        let items = self
            .sorted(None)
            .await
            .into_iter()
            .take(limit as usize)
            .collect();
        Ok(self.join_owners(items).await)
    }

    async fn list_page(
        &self,
        owner: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Vec<ItemWithOwner>, DomainError> {
        let items = self
            .sorted(owner)
            .await
            .into_iter()
            .skip(page.skip as usize)
            .take(page.take as usize)
            .collect();
        Ok(self.join_owners(items).await)
    }

    async fn count(&self, owner: Option<Uuid>) -> Result<u64, DomainError> {
        let items = self.items.read().await;
        let count = items
            .iter()
            .filter(|i| owner.map_or(true, |o| i.posted_by_id == o))
            .count();
        Ok(count as u64)
    }
}
