//! Multipart item submission

use actix_multipart::{Field, Multipart};
use actix_web::{web, HttpResponse};
use futures_util::TryStreamExt;

use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthenticatedUser;

use lf_core::domain::entities::item::{ItemDraft, ItemType};
use lf_core::errors::{DomainError, ValidationError};
use lf_core::repositories::ItemRepository;
use lf_core::services::blob::{BlobStoreTrait, Upload};
use lf_shared::UploadConfig;

use super::ItemState;

/// Form field carrying the optional image or video
const FILE_FIELD: &str = "image";

/// Largest accepted text field
const MAX_TEXT_FIELD_BYTES: usize = 16 * 1024;

/// Handler for POST /api/items/lost
pub async fn create_lost<I, B>(
    state: web::Data<ItemState<I, B>>,
    user: AuthenticatedUser,
    payload: Multipart,
) -> HttpResponse
where
    I: ItemRepository + 'static,
    B: BlobStoreTrait + 'static,
{
    create(state, user, payload, ItemType::Lost).await
}

/// Handler for POST /api/items/found
pub async fn create_found<I, B>(
    state: web::Data<ItemState<I, B>>,
    user: AuthenticatedUser,
    payload: Multipart,
) -> HttpResponse
where
    I: ItemRepository + 'static,
    B: BlobStoreTrait + 'static,
{
    create(state, user, payload, ItemType::Found).await
}

/// Read the form, then create the item
///
/// # Form fields
///
/// `itemType`, `itemName`, `description`, `location`, `contact` and an
/// optional `image` file.
///
/// # Response
///
/// - 201 Created: the item
/// - 400 Bad Request: blank field, mismatched `itemType`, bad or oversized file
/// - 500: the item could not be stored
async fn create<I, B>(
    state: web::Data<ItemState<I, B>>,
    user: AuthenticatedUser,
    payload: Multipart,
    kind: ItemType,
) -> HttpResponse
where
    I: ItemRepository + 'static,
    B: BlobStoreTrait + 'static,
{
    let (draft, upload) = match read_form(payload, &state.upload).await {
        Ok(form) => form,
        Err(error) => return handle_domain_error(error),
    };

    match state
        .item_service
        .create_item(kind, draft, upload, user.user_id)
        .await
    {
        Ok(item) => HttpResponse::Created().json(item),
        Err(error) => handle_domain_error(error),
    }
}

/// Collect the text fields and the first non-empty file
async fn read_form(
    mut payload: Multipart,
    config: &UploadConfig,
) -> Result<(ItemDraft, Option<Upload>), DomainError> {
    let mut draft = ItemDraft::default();
    let mut upload = None;

    while let Some(field) = payload.try_next().await.map_err(malformed)? {
        let name = field.name().to_string();
        let file_name = field
            .content_disposition()
            .get_filename()
            .map(|f| f.to_string());

        match file_name {
            Some(file_name) if name == FILE_FIELD && upload.is_none() => {
                // Browsers send an empty file part when nothing was chosen
                if file_name.is_empty() {
                    drain(field).await?;
                    continue;
                }
                upload = Some(read_file(field, file_name, config).await?);
            }
            Some(_) => drain(field).await?,
            None => {
                let bytes = read_limited(field, MAX_TEXT_FIELD_BYTES)
                    .await?
                    .ok_or_else(|| ValidationError::invalid_format(name.clone()))?;
                draft.set_field(&name, String::from_utf8_lossy(&bytes).into_owned());
            }
        }
    }

    Ok((draft, upload))
}

async fn read_file(
    field: Field,
    file_name: String,
    config: &UploadConfig,
) -> Result<Upload, DomainError> {
    let content_type = field
        .content_type()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_default();

    // Reject by type before buffering the body
    if !config.accepts(&content_type) {
        return Err(ValidationError::UnsupportedMediaType { content_type }.into());
    }

    let bytes = read_limited(field, config.max_bytes)
        .await?
        .ok_or(ValidationError::FileTooLarge {
            limit_bytes: config.max_bytes as u64,
        })?;

    Ok(Upload {
        file_name,
        content_type,
        bytes,
    })
}

/// Buffer a field, or `None` once it grows past `limit`
async fn read_limited(mut field: Field, limit: usize) -> Result<Option<Vec<u8>>, DomainError> {
    let mut buf = Vec::new();
    while let Some(chunk) = field.try_next().await.map_err(malformed)? {
        if buf.len() + chunk.len() > limit {
            return Ok(None);
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(Some(buf))
}

async fn drain(mut field: Field) -> Result<(), DomainError> {
    while field.try_next().await.map_err(malformed)?.is_some() {}
    Ok(())
}

fn malformed(error: actix_multipart::MultipartError) -> DomainError {
    tracing::debug!(error = %error, "Malformed multipart body");
    ValidationError::invalid_format("multipart").into()
}
