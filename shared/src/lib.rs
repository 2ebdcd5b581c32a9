//! Shared utilities and common types for the Lost & Found server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Pagination and response structures
//! - Utility functions (email validation and masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CookieConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    LoggingConfig, MailConfig, MailProvider, OtpConfig, ServerConfig, UploadConfig,
};
pub use types::{MessageResponse, Page, PageRequest};
pub use utils::validation;
