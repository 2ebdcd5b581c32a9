//! Unit tests for mock item repository

use chrono::{Duration, Utc};
use lf_shared::PageRequest;
use uuid::Uuid;

use crate::domain::entities::item::{Item, ItemDraft, ItemType};
use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::item::{ItemRepository, MockItemRepository};
use crate::repositories::user::{MockUserRepository, UserRepository};

async fn owner(users: &MockUserRepository, email: &str) -> User {
    users
        .create(User::new("Owner".into(), email.into(), "0400".into()))
        .await
        .unwrap()
}

fn item(owner: Uuid, name: &str, minutes_ago: i64) -> Item {
    let draft = ItemDraft {
        item_type: Some("lost".into()),
        item_name: Some(name.into()),
        description: Some("desc".into()),
        location: Some("Library".into()),
        contact: Some("0400".into()),
    };
    let mut item = Item::from_draft(draft, ItemType::Lost, owner, None).unwrap();
    item.created_at = Utc::now() - Duration::minutes(minutes_ago);
    item
}

#[tokio::test]
async fn test_create_requires_existing_owner() {
    let users = MockUserRepository::new();
    let repo = MockItemRepository::new(users);

    let result = repo.create(item(Uuid::new_v4(), "Wallet", 0)).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_listing_is_newest_first_with_owner() {
    let users = MockUserRepository::new();
    let ada = owner(&users, "ada@example.com").await;
    let repo = MockItemRepository::new(users);

    repo.create(item(ada.id, "old", 30)).await.unwrap();
    repo.create(item(ada.id, "new", 1)).await.unwrap();
    repo.create(item(ada.id, "mid", 10)).await.unwrap();

    let recent = repo.list_recent(2).await.unwrap();
    let names: Vec<_> = recent.iter().map(|i| i.item.item_name.as_str()).collect();
    assert_eq!(names, vec!["new", "mid"]);
    assert_eq!(recent[0].posted_by.email, "ada@example.com");
}

#[tokio::test]
async fn test_ties_are_broken_by_id() {
    let users = MockUserRepository::new();
    let ada = owner(&users, "ada@example.com").await;
    let repo = MockItemRepository::new(users);

    let at = Utc::now();
    for name in ["a", "b", "c", "d"] {
        let mut it = item(ada.id, name, 0);
        it.created_at = at;
        repo.create(it).await.unwrap();
    }

    let first = repo.list_page(None, PageRequest::new(0, 2)).await.unwrap();
    let second = repo.list_page(None, PageRequest::new(2, 2)).await.unwrap();
    let mut ids: Vec<_> = first.iter().chain(second.iter()).map(|i| i.item.id).collect();
    let sorted = {
        let mut s = ids.clone();
        s.sort_by(|a, b| b.cmp(a));
        s
    };
    assert_eq!(ids, sorted);
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[tokio::test]
async fn test_owner_filter_and_count() {
    let users = MockUserRepository::new();
    let ada = owner(&users, "ada@example.com").await;
    let bob = owner(&users, "bob@example.com").await;
    let repo = MockItemRepository::new(users);

    repo.create(item(ada.id, "a1", 3)).await.unwrap();
    repo.create(item(bob.id, "b1", 2)).await.unwrap();
    repo.create(item(ada.id, "a2", 1)).await.unwrap();

    assert_eq!(repo.count(None).await.unwrap(), 3);
    assert_eq!(repo.count(Some(ada.id)).await.unwrap(), 2);

    let mine = repo
        .list_page(Some(bob.id), PageRequest::default())
        .await
        .unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].item.posted_by_id, bob.id);
}

#[tokio::test]
async fn test_simulated_failure() {
    let users = MockUserRepository::new();
    let ada = owner(&users, "ada@example.com").await;
    let repo = MockItemRepository::new(users);
    repo.set_fail_on_create(true);

    let result = repo.create(item(ada.id, "Wallet", 0)).await;
    assert!(matches!(result, Err(DomainError::Internal { .. })));
}
