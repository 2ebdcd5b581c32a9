//! Error types for authentication, token handling and input validation

use thiserror::Error;

/// Authentication-related errors
///
/// The display strings are the messages returned to clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("User already exists.")]
    UserAlreadyExists,

    #[error("User not found.")]
    UserNotFound,

    #[error("Unauthorized: {0}")]
    Unauthorized(UnauthorizedReason),

    #[error("Session expired. Please log in again.")]
    SessionExpired,

    #[error("Invalid or expired OTP.")]
    InvalidOtp,

    #[error("Failed to deliver one-time code")]
    NotificationFailed,
}

/// Why a request was rejected as unauthorized
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnauthorizedReason {
    /// No pending-verification cookie on an OTP submission
    #[error("No session token provided.")]
    NoSessionToken,

    /// No session cookie or bearer token
    #[error("No token provided.")]
    NoToken,

    /// A token was present but failed verification
    #[error("Invalid or expired token.")]
    InvalidToken,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token expired")]
    TokenExpired,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields.")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid file type. Only images and videos are allowed.")]
    UnsupportedMediaType { content_type: String },

    #[error("File too large. Maximum size is {limit_bytes} bytes.")]
    FileTooLarge { limit_bytes: u64 },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        Self::RequiredField {
            field: field.into(),
        }
    }

    pub fn invalid_format(field: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
        }
    }
}
