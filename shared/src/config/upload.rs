//! Uploaded media storage configuration

use serde::{Deserialize, Serialize};

/// Upload limit: 10 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Upload storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadConfig {
    /// Directory uploaded files are written to
    pub dir: String,

    /// URL prefix the directory is served under
    pub public_prefix: String,

    /// Maximum accepted file size in bytes
    pub max_bytes: usize,

    /// Accepted MIME type prefixes
    pub accepted_mime_prefixes: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: String::from("uploads"),
            public_prefix: String::from("/uploads"),
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            accepted_mime_prefixes: vec![String::from("image/"), String::from("video/")],
        }
    }
}

impl UploadConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            dir: std::env::var("UPLOAD_DIR").unwrap_or(defaults.dir),
            max_bytes: std::env::var("UPLOAD_MAX_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_bytes),
            ..defaults
        }
    }

    /// Use a different storage directory
    pub fn with_dir(mut self, dir: impl Into<String>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Check a declared content type against the accepted prefixes
    pub fn accepts(&self, content_type: &str) -> bool {
        let content_type = content_type.to_ascii_lowercase();
        self.accepted_mime_prefixes
            .iter()
            .any(|prefix| content_type.starts_with(prefix.as_str()))
    }
}
