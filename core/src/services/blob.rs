//! Storage of uploaded media

use async_trait::async_trait;
use lf_shared::UploadConfig;

use crate::errors::{DomainError, ValidationError};

/// A file received with a form submission
#[derive(Debug, Clone)]
pub struct Upload {
    /// Name the client gave the file; only its extension is kept
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    /// Extension of the client file name including the dot, or empty
    pub fn extension(&self) -> String {
        std::path::Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e))
            .unwrap_or_default()
    }

    /// Check the upload against the accepted MIME types and size limit
    pub fn check(&self, config: &UploadConfig) -> Result<(), ValidationError> {
        if !config.accepts(&self.content_type) {
            return Err(ValidationError::UnsupportedMediaType {
                content_type: self.content_type.clone(),
            });
        }
        if self.bytes.len() > config.max_bytes {
            return Err(ValidationError::FileTooLarge {
                limit_bytes: config.max_bytes as u64,
            });
        }
        Ok(())
    }
}

/// Reference to an accepted blob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBlob {
    /// Public path, e.g. `/uploads/1718000000000.png`
    pub reference: String,
    pub size: u64,
}

/// Trait for blob storage integration
#[async_trait]
pub trait BlobStoreTrait: Send + Sync {
    /// Accept an upload, or reject it by type or size with a validation error
    async fn store(&self, upload: Upload) -> Result<StoredBlob, DomainError>;

    /// Remove a previously stored blob by reference
    async fn delete(&self, reference: &str) -> Result<(), DomainError>;
}
