//! MySQL implementation of the ItemRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use lf_core::domain::entities::item::{Item, ItemType, ItemWithOwner, OwnerSummary};
use lf_core::errors::DomainError;
use lf_core::repositories::ItemRepository;
use lf_shared::PageRequest;

use super::{db_error, parse_uuid};

const LISTING_SELECT: &str = r#"
    SELECT i.id, i.item_type, i.item_name, i.description, i.location, i.contact,
           i.image_url, i.created_at, i.posted_by_id,
           u.name AS owner_name, u.email AS owner_email
    FROM items i
    INNER JOIN users u ON u.id = i.posted_by_id
"#;

const LISTING_ORDER: &str = "ORDER BY i.created_at DESC, i.id DESC";

/// MySQL implementation of ItemRepository
pub struct MySqlItemRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlItemRepository {
    /// Create a new MySQL item repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a joined listing row to ItemWithOwner
    fn row_to_listing(row: &sqlx::mysql::MySqlRow) -> Result<ItemWithOwner, DomainError> {
        let get = db_error("Failed to read item row");

        let id: String = row.try_get("id").map_err(&get)?;
        let posted_by_id: String = row.try_get("posted_by_id").map_err(&get)?;
        let item_type: String = row.try_get("item_type").map_err(&get)?;
        let item_type: ItemType = item_type.parse().map_err(|_| DomainError::Internal {
            message: format!("Unknown item_type in items.{}: {}", id, item_type),
        })?;

        let item = Item {
            id: parse_uuid(&id, "items.id")?,
            item_type,
            item_name: row.try_get("item_name").map_err(&get)?,
            description: row.try_get("description").map_err(&get)?,
            location: row.try_get("location").map_err(&get)?,
            contact: row.try_get("contact").map_err(&get)?,
            image_url: row.try_get("image_url").map_err(&get)?,
            created_at: row.try_get("created_at").map_err(&get)?,
            posted_by_id: parse_uuid(&posted_by_id, "items.posted_by_id")?,
        };

        Ok(ItemWithOwner {
            item,
            posted_by: OwnerSummary {
                name: row.try_get("owner_name").map_err(&get)?,
                email: row.try_get("owner_email").map_err(&get)?,
            },
        })
    }
}

#[async_trait]
impl ItemRepository for MySqlItemRepository {
    async fn create(&self, item: Item) -> Result<Item, DomainError> {
        let query = r#"
            INSERT INTO items (
                id, item_type, item_name, description, location, contact,
                image_url, created_at, posted_by_id
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(item.id.to_string())
            .bind(item.item_type.as_str())
            .bind(&item.item_name)
            .bind(&item.description)
            .bind(&item.location)
            .bind(&item.contact)
            .bind(&item.image_url)
            .bind(item.created_at)
            .bind(item.posted_by_id.to_string())
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(item),
            Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() => {
                Err(DomainError::NotFound {
                    resource: "User".to_string(),
                })
            }
            Err(e) => Err(db_error("Failed to create item")(e)),
        }
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<ItemWithOwner>, DomainError> {
        let query = format!("{} {} LIMIT ?", LISTING_SELECT, LISTING_ORDER);

        let rows = sqlx::query(&query)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list recent items"))?;

        rows.iter().map(Self::row_to_listing).collect()
    }

    async fn list_page(
        &self,
        owner: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Vec<ItemWithOwner>, DomainError> {
        let rows = match owner {
            Some(owner) => {
                let query = format!(
                    "{} WHERE i.posted_by_id = ? {} LIMIT ? OFFSET ?",
                    LISTING_SELECT, LISTING_ORDER
                );
                sqlx::query(&query)
                    .bind(owner.to_string())
                    .bind(page.limit_i64())
                    .bind(page.offset_i64())
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let query = format!("{} {} LIMIT ? OFFSET ?", LISTING_SELECT, LISTING_ORDER);
                sqlx::query(&query)
                    .bind(page.limit_i64())
                    .bind(page.offset_i64())
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(db_error("Failed to list items"))?;

        rows.iter().map(Self::row_to_listing).collect()
    }

    async fn count(&self, owner: Option<Uuid>) -> Result<u64, DomainError> {
        let count: i64 = match owner {
            Some(owner) => {
                sqlx::query_scalar("SELECT COUNT(*) FROM items WHERE posted_by_id = ?")
                    .bind(owner.to_string())
                    .fetch_one(&self.pool)
                    .await
            }
            None => {
                sqlx::query_scalar("SELECT COUNT(*) FROM items")
                    .fetch_one(&self.pool)
                    .await
            }
        }
        .map_err(db_error("Failed to count items"))?;

        Ok(count.max(0) as u64)
    }
}
