//! Business services containing domain logic and use cases.

pub mod auth;
pub mod blob;
pub mod catalog;
pub mod guard;
pub mod notifier;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig};
pub use blob::{BlobStoreTrait, StoredBlob, Upload};
pub use catalog::{ItemService, RECENT_ITEMS_LIMIT};
pub use guard::{AccessGuard, Identity};
pub use notifier::{NotifierTrait, OtpMessage};
pub use token::TokenService;
