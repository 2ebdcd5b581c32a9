pub mod auth;
pub mod items;
