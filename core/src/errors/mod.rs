//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, TokenError, UnauthorizedReason, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DomainError {
    /// Shorthand for an internal error carrying a message
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True for errors that are the caller's fault (4xx)
    pub fn is_client_error(&self) -> bool {
        match self {
            DomainError::Internal { .. } => false,
            DomainError::Auth(AuthError::NotificationFailed) => false,
            DomainError::Token(TokenError::TokenGenerationFailed) => false,
            _ => true,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_conversions() {
        let err: DomainError = AuthError::InvalidOtp.into();
        assert!(matches!(err, DomainError::Auth(AuthError::InvalidOtp)));

        let err: DomainError = TokenError::TokenExpired.into();
        assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));

        let err: DomainError = ValidationError::required("contact").into();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::RequiredField { .. })
        ));
    }

    #[test]
    fn test_client_error_classification() {
        assert!(DomainError::from(AuthError::UserAlreadyExists).is_client_error());
        assert!(DomainError::from(TokenError::InvalidSignature).is_client_error());
        assert!(!DomainError::from(AuthError::NotificationFailed).is_client_error());
        assert!(!DomainError::internal("db down").is_client_error());
    }
}
