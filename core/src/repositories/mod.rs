pub mod item;
pub mod user;

pub use item::{ItemRepository, MockItemRepository};
pub use user::{MockUserRepository, UserRepository};
