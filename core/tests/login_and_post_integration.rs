//! Integration test: a user logs in with an emailed code and posts an item

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use lf_core::domain::entities::item::{ItemDraft, ItemType};
    use lf_core::errors::DomainError;
    use lf_core::repositories::{MockItemRepository, MockUserRepository};
    use lf_core::services::{
        AuthService, AuthServiceConfig, BlobStoreTrait, ItemService, NotifierTrait, OtpMessage,
        StoredBlob, TokenService, Upload,
    };
    use lf_shared::{JwtConfig, PageRequest};

    /// Remembers the last code it was asked to send
    #[derive(Default)]
    struct Inbox {
        last: Mutex<Option<OtpMessage>>,
    }

    #[async_trait]
    impl NotifierTrait for Inbox {
        async fn send(&self, message: &OtpMessage) -> Result<(), String> {
            *self.last.lock().unwrap() = Some(message.clone());
            Ok(())
        }
    }

    /// Accepts nothing; the flow below never uploads
    struct NoBlobs;

    #[async_trait]
    impl BlobStoreTrait for NoBlobs {
        async fn store(&self, _upload: Upload) -> Result<StoredBlob, DomainError> {
            Err(DomainError::internal("unexpected upload"))
        }

        async fn delete(&self, _reference: &str) -> Result<(), DomainError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_register_login_verify_then_post() {
        let users = Arc::new(MockUserRepository::new());
        let items = Arc::new(MockItemRepository::new(users.as_ref().clone()));
        let inbox = Arc::new(Inbox::default());
        let tokens = Arc::new(TokenService::new(JwtConfig::new("integration")));

        let auth = AuthService::new(
            users.clone(),
            inbox.clone(),
            tokens.clone(),
            AuthServiceConfig::default(),
        );
        let catalog = ItemService::new(items, Arc::new(NoBlobs));

        auth.register("Ana", "ana@example.com", "555-0101").await.unwrap();
        let pending = auth.login("ana@example.com").await.unwrap();

        let message = inbox.last.lock().unwrap().clone().unwrap();
        assert_eq!(message.to, "ana@example.com");
        assert_eq!(message.subject, "Your Login OTP");
        assert!(message.body.contains(&message.code));

        let session = auth.verify_otp(Some(pending.as_str()), &message.code).await.unwrap();
        let identity = auth.check_status(Some(session.as_str())).unwrap();

        let mut draft = ItemDraft::default();
        draft.set_field("itemType", "found".into());
        draft.set_field("itemName", "Keys".into());
        draft.set_field("description", "Three keys on a red ring".into());
        draft.set_field("location", "Bus stop 12".into());
        draft.set_field("contact", "ana@example.com".into());

        let item = catalog
            .create_item(ItemType::Found, draft, None, identity.user_id)
            .await
            .unwrap();
        assert_eq!(item.posted_by_id, identity.user_id);

        let mine = catalog
            .list_mine(identity.user_id, PageRequest::default())
            .await
            .unwrap();
        assert_eq!(mine.total_items_count, 1);
        assert_eq!(mine.items[0].posted_by.name, "Ana");

        let profile = auth.get_profile(identity.user_id).await.unwrap();
        assert_eq!(profile.email, "ana@example.com");
    }
}
