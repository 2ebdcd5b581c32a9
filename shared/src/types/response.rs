//! API response types and wrappers

use serde::{Deserialize, Serialize};

/// Body of most auth endpoints and of 4xx errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of input-validation and server errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status ("healthy")
    pub status: String,

    /// Service name
    pub service: String,

    /// Service version
    pub version: String,

    /// RFC 3339 timestamp
    pub timestamp: String,
}
