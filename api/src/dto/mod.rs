pub mod auth;
pub mod items;

pub use auth::*;
pub use items::*;
