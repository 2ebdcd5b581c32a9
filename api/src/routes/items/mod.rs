//! Item route handlers
//!
//! - Public listings (paged and recent)
//! - The caller's own items
//! - Posting lost and found items with an optional image or video

pub mod create;
pub mod list;

use std::sync::Arc;

use lf_core::repositories::ItemRepository;
use lf_core::services::blob::BlobStoreTrait;
use lf_core::services::catalog::ItemService;
use lf_shared::UploadConfig;

/// Shared state of the item endpoints
pub struct ItemState<I, B>
where
    I: ItemRepository,
    B: BlobStoreTrait,
{
    pub item_service: Arc<ItemService<I, B>>,
    /// Limits applied while the multipart body is read
    pub upload: UploadConfig,
}

impl<I, B> ItemState<I, B>
where
    I: ItemRepository,
    B: BlobStoreTrait,
{
    pub fn new(item_service: Arc<ItemService<I, B>>, upload: UploadConfig) -> Self {
        Self {
            item_service,
            upload,
        }
    }
}
