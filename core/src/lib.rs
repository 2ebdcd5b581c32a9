//! # Lost & Found Core
//!
//! Core business logic and domain layer for the Lost & Found backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types. Storage, email and file handling live behind traits
//! implemented in the infrastructure crate.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
