//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the core crate defines as
//! traits:
//!
//! - **Database**: MySQL user and item repositories using SQLx
//! - **Mail**: one-time code delivery over SMTP (lettre) or a logging mock
//! - **Storage**: uploaded media on the local filesystem
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

use lf_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Mail module - one-time code delivery
pub mod mail;

/// Storage module - uploaded media
pub mod storage;

#[cfg(feature = "mysql")]
pub use database::{DatabasePool, MySqlItemRepository, MySqlUserRepository};
pub use mail::{create_notifier, EmailNotifier, MockNotifier, SmtpNotifier};
pub use storage::LocalBlobStore;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[cfg(feature = "mysql")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Filesystem error
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail delivery error
    #[error("Mail service error: {0}")]
    Mail(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::Internal {
            message: err.to_string(),
        }
    }
}
