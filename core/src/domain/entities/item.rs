//! Item entity representing a lost or found report.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use lf_shared::validation::is_blank;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;

/// Whether an item was lost or found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Lost,
    Found,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Lost => "lost",
            ItemType::Found => "found",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lost" => Ok(ItemType::Lost),
            "found" => Ok(ItemType::Found),
            _ => Err(ValidationError::invalid_format("itemType")),
        }
    }
}

/// Item entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    pub item_type: ItemType,
    pub item_name: String,
    pub description: String,
    pub location: String,
    pub contact: String,

    /// Public path of the uploaded image or video, if any
    #[serde(rename = "imageURL")]
    pub image_url: Option<String>,

    pub created_at: DateTime<Utc>,

    /// Owner of the report; always an existing user
    pub posted_by_id: Uuid,
}

/// Raw text fields of a create-item form, as submitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub item_type: Option<String>,
    pub item_name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub contact: Option<String>,
}

impl ItemDraft {
    /// Set a field by its form name; unknown names are ignored
    pub fn set_field(&mut self, name: &str, value: String) {
        let slot = match name {
            "itemType" => &mut self.item_type,
            "itemName" => &mut self.item_name,
            "description" => &mut self.description,
            "location" => &mut self.location,
            "contact" => &mut self.contact,
            _ => return,
        };
        *slot = Some(value);
    }
}

fn required(value: Option<String>) -> Result<String, ValidationError> {
    let value = value.unwrap_or_default();
    if is_blank(&value) {
        return Err(ValidationError::required("item"));
    }
    Ok(value.trim().to_string())
}

impl Item {
    /// Build an item from a submitted draft.
    ///
    /// All five text fields must be non-blank, and `itemType` must name the
    /// same kind as `expected` (the route the form was posted to).
    pub fn from_draft(
        draft: ItemDraft,
        expected: ItemType,
        posted_by_id: Uuid,
        image_url: Option<String>,
    ) -> Result<Self, ValidationError> {
        let item_type = required(draft.item_type)?;
        let item_name = required(draft.item_name)?;
        let description = required(draft.description)?;
        let location = required(draft.location)?;
        let contact = required(draft.contact)?;

        let item_type: ItemType = item_type.parse()?;
        if item_type != expected {
            return Err(ValidationError::invalid_format("itemType"));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            item_type,
            item_name,
            description,
            location,
            contact,
            image_url,
            created_at: Utc::now(),
            posted_by_id,
        })
    }
}

/// Owner details joined into listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerSummary {
    pub name: String,
    pub email: String,
}

/// An item together with its owner's public details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemWithOwner {
    #[serde(flatten)]
    pub item: Item,
    pub posted_by: OwnerSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft(kind: &str) -> ItemDraft {
        ItemDraft {
            item_type: Some(kind.into()),
            item_name: Some("Wallet".into()),
            description: Some("Brown leather".into()),
            location: Some("Library".into()),
            contact: Some("0400 000 000".into()),
        }
    }

    #[test]
    fn test_from_draft_trims_fields() {
        let mut draft = full_draft("lost");
        draft.item_name = Some("  Wallet  ".into());
        let item = Item::from_draft(draft, ItemType::Lost, Uuid::new_v4(), None).unwrap();
        assert_eq!(item.item_name, "Wallet");
        assert_eq!(item.item_type, ItemType::Lost);
    }

    #[test]
    fn test_blank_field_is_missing() {
        let mut draft = full_draft("found");
        draft.contact = Some("   ".into());
        let err = Item::from_draft(draft, ItemType::Found, Uuid::new_v4(), None).unwrap_err();
        assert!(matches!(err, ValidationError::RequiredField { .. }));

        let mut draft = full_draft("found");
        draft.location = None;
        let err = Item::from_draft(draft, ItemType::Found, Uuid::new_v4(), None).unwrap_err();
        assert!(matches!(err, ValidationError::RequiredField { .. }));
    }

    #[test]
    fn test_type_must_match_route() {
        let err = Item::from_draft(full_draft("found"), ItemType::Lost, Uuid::new_v4(), None)
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));

        let err = Item::from_draft(full_draft("stolen"), ItemType::Lost, Uuid::new_v4(), None)
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn test_set_field_by_form_name() {
        let mut draft = ItemDraft::default();
        draft.set_field("itemName", "Keys".into());
        draft.set_field("image", "ignored".into());
        assert_eq!(draft.item_name.as_deref(), Some("Keys"));
        assert!(draft.item_type.is_none());
    }

    #[test]
    fn test_listing_json_shape() {
        let item = Item::from_draft(
            full_draft("lost"),
            ItemType::Lost,
            Uuid::new_v4(),
            Some("/uploads/1.png".into()),
        )
        .unwrap();
        let listed = ItemWithOwner {
            item,
            posted_by: OwnerSummary {
                name: "Ada".into(),
                email: "ada@example.com".into(),
            },
        };

        let json = serde_json::to_value(&listed).unwrap();
        assert_eq!(json["itemType"], "lost");
        assert_eq!(json["imageURL"], "/uploads/1.png");
        assert_eq!(json["postedBy"]["name"], "Ada");
        assert!(json.get("postedById").is_some());
    }
}
