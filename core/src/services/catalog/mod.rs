//! Item catalog service module
//!
//! Creation of lost/found reports with an optional image or video, and the
//! recent, paginated and per-owner listings.

mod service;

#[cfg(test)]
mod tests;

pub use service::{ItemService, RECENT_ITEMS_LIMIT};
