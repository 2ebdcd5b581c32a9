//! Main item catalog service implementation

use std::sync::Arc;

use lf_shared::{Page, PageRequest};
use uuid::Uuid;

use crate::domain::entities::item::{Item, ItemDraft, ItemType, ItemWithOwner};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::ItemRepository;
use crate::services::blob::{BlobStoreTrait, StoredBlob, Upload};

/// Number of items returned by the recent listing
pub const RECENT_ITEMS_LIMIT: u32 = 10;

/// Service for creating and listing items
pub struct ItemService<I, B>
where
    I: ItemRepository,
    B: BlobStoreTrait,
{
    item_repository: Arc<I>,
    blob_store: Arc<B>,
}

impl<I, B> ItemService<I, B>
where
    I: ItemRepository,
    B: BlobStoreTrait,
{
    pub fn new(item_repository: Arc<I>, blob_store: Arc<B>) -> Self {
        Self {
            item_repository,
            blob_store,
        }
    }

    /// Create an item posted by `owner_id`
    ///
    /// The upload, if any, is stored first. If the form is then rejected or
    /// the insert fails, the stored blob is deleted again.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - bad upload, blank field, or item type that does
    ///   not match `kind`
    /// * `DomainError::Internal` - the item could not be persisted
    pub async fn create_item(
        &self,
        kind: ItemType,
        draft: ItemDraft,
        upload: Option<Upload>,
        owner_id: Uuid,
    ) -> DomainResult<Item> {
        let blob = match upload {
            Some(upload) => Some(self.blob_store.store(upload).await?),
            None => None,
        };
        let image_url = blob.as_ref().map(|b| b.reference.clone());

        let item = match Item::from_draft(draft, kind, owner_id, image_url) {
            Ok(item) => item,
            Err(e) => {
                self.discard(blob.as_ref()).await;
                return Err(e.into());
            }
        };

        match self.item_repository.create(item).await {
            Ok(item) => {
                tracing::info!(item_id = %item.id, owner_id = %owner_id, kind = %kind, "Item created");
                Ok(item)
            }
            Err(e) => {
                tracing::error!(owner_id = %owner_id, error = %e, "Failed to persist item");
                self.discard(blob.as_ref()).await;
                Err(DomainError::internal(e.to_string()))
            }
        }
    }

    /// The most recently created items
    pub async fn list_recent(&self) -> DomainResult<Vec<ItemWithOwner>> {
        self.item_repository.list_recent(RECENT_ITEMS_LIMIT).await
    }

    /// A page over all items, with the total item count
    pub async fn list_all(&self, page: PageRequest) -> DomainResult<Page<ItemWithOwner>> {
        self.list(None, page).await
    }

    /// A page over the items posted by `owner_id`, with that owner's count
    pub async fn list_mine(
        &self,
        owner_id: Uuid,
        page: PageRequest,
    ) -> DomainResult<Page<ItemWithOwner>> {
        self.list(Some(owner_id), page).await
    }

    async fn list(&self, owner: Option<Uuid>, page: PageRequest) -> DomainResult<Page<ItemWithOwner>> {
        let items = self.item_repository.list_page(owner, page).await?;
        let total = self.item_repository.count(owner).await?;
        Ok(Page::new(items, total))
    }

    /// Best-effort removal of a blob whose item was not created
    async fn discard(&self, blob: Option<&StoredBlob>) {
        let Some(blob) = blob else { return };
        if let Err(e) = self.blob_store.delete(&blob.reference).await {
            tracing::error!(reference = %blob.reference, error = %e, "Failed to delete orphaned upload");
        }
    }
}
