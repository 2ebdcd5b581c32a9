//! Shared fixtures for the API integration tests
//!
//! The app runs against the in-memory repositories, the mock notifier and a
//! blob store rooted in a temporary directory.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::web;
use tempfile::TempDir;
use uuid::Uuid;

use lf_api::routes::auth::AuthState;
use lf_api::routes::items::ItemState;
use lf_core::domain::entities::user::User;
use lf_core::repositories::{MockItemRepository, MockUserRepository, UserRepository};
use lf_core::services::{AuthService, AuthServiceConfig, ItemService, TokenService};
use lf_infra::{LocalBlobStore, MockNotifier};
use lf_shared::{AuthConfig, CorsConfig, JwtConfig, UploadConfig};

pub const TEST_SECRET: &str = "integration-test-secret";

pub type TestAuthState = AuthState<MockUserRepository, MockNotifier>;
pub type TestItemState = ItemState<MockItemRepository, LocalBlobStore>;

pub struct TestContext {
    pub users: Arc<MockUserRepository>,
    pub items: Arc<MockItemRepository>,
    pub notifier: MockNotifier,
    pub tokens: Arc<TokenService>,
    pub auth_state: web::Data<TestAuthState>,
    pub item_state: web::Data<TestItemState>,
    pub cors: CorsConfig,
    pub upload_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let upload_dir = TempDir::new().unwrap();
        let upload = UploadConfig::default().with_dir(upload_dir.path().to_string_lossy());

        let auth_config = AuthConfig {
            jwt: JwtConfig::new(TEST_SECRET),
            ..AuthConfig::default()
        };

        let users = Arc::new(MockUserRepository::new());
        let items = Arc::new(MockItemRepository::new(users.as_ref().clone()));
        let notifier = MockNotifier::new();
        let tokens = Arc::new(TokenService::new(auth_config.jwt.clone()));

        let auth_service = Arc::new(AuthService::new(
            users.clone(),
            Arc::new(notifier.clone()),
            tokens.clone(),
            AuthServiceConfig::from(&auth_config),
        ));
        let blob_store = Arc::new(LocalBlobStore::new(upload.clone()));
        let item_service = Arc::new(ItemService::new(items.clone(), blob_store));

        Self {
            users,
            items,
            notifier,
            tokens,
            auth_state: web::Data::new(AuthState::new(auth_service, &auth_config)),
            item_state: web::Data::new(ItemState::new(item_service, upload)),
            cors: CorsConfig::default(),
            upload_dir,
        }
    }

    /// Store a registered user directly
    pub async fn seed_user(&self, name: &str, email: &str) -> User {
        let user = User::new(name.to_string(), email.to_string(), "555-0100".to_string());
        self.users.create(user).await.unwrap()
    }

    /// A valid session cookie for `user_id`
    pub fn session_cookie(&self, user_id: Uuid) -> Cookie<'static> {
        Cookie::new("token", self.tokens.issue_session(user_id).unwrap())
    }

    /// Number of files in the uploads directory
    pub fn stored_files(&self) -> usize {
        std::fs::read_dir(self.upload_dir.path()).unwrap().count()
    }
}

/// Build a multipart/form-data body
///
/// `files` entries are `(field, file name, content type, bytes)`.
pub fn multipart_body(
    fields: &[(&str, &str)],
    files: &[(&str, &str, &str, &[u8])],
) -> (String, Vec<u8>) {
    let boundary = "----lf-test-boundary";
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    for (name, file_name, content_type, bytes) in files {
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                name, file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());
    (format!("multipart/form-data; boundary={}", boundary), body)
}

/// The five text fields of a complete item form
pub fn item_fields(item_type: &'static str) -> Vec<(&'static str, &'static str)> {
    vec![
        ("itemType", item_type),
        ("itemName", "Blue umbrella"),
        ("description", "Folding, wooden handle"),
        ("location", "Library, 2nd floor"),
        ("contact", "555-0199"),
    ]
}
