use actix_web::{web, HttpResponse};

use crate::dto::items::PaginationQuery;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthenticatedUser;

use lf_core::repositories::ItemRepository;
use lf_core::services::blob::BlobStoreTrait;

use super::ItemState;

/// Handler for GET /api/items?skip=&take=
///
/// Newest first, with `totalItemsCount` over all items.
pub async fn list_items<I, B>(
    state: web::Data<ItemState<I, B>>,
    query: web::Query<PaginationQuery>,
) -> HttpResponse
where
    I: ItemRepository + 'static,
    B: BlobStoreTrait + 'static,
{
    match state.item_service.list_all(query.page()).await {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/items/recent
pub async fn recent_items<I, B>(state: web::Data<ItemState<I, B>>) -> HttpResponse
where
    I: ItemRepository + 'static,
    B: BlobStoreTrait + 'static,
{
    match state.item_service.list_recent().await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/items/my-items?skip=&take=
///
/// Requires the session middleware; the count covers the caller's items only.
pub async fn my_items<I, B>(
    state: web::Data<ItemState<I, B>>,
    user: AuthenticatedUser,
    query: web::Query<PaginationQuery>,
) -> HttpResponse
where
    I: ItemRepository + 'static,
    B: BlobStoreTrait + 'static,
{
    match state.item_service.list_mine(user.user_id, query.page()).await {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(error) => handle_domain_error(error),
    }
}
