//! Domain entities representing core business objects.

pub mod item;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use item::{Item, ItemDraft, ItemType, ItemWithOwner, OwnerSummary};
pub use token::{Claims, TokenKind};
pub use user::{OneTimeCode, User, OTP_MAX, OTP_MIN};
