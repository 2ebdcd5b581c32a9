//! Access guard for protected routes

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::token::TokenKind;
use crate::errors::{AuthError, DomainError, UnauthorizedReason};
use crate::services::token::TokenService;

/// The authenticated caller of a protected route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
}

/// Resolves a session token into an identity
#[derive(Clone)]
pub struct AccessGuard {
    token_service: Arc<TokenService>,
}

impl AccessGuard {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }

    /// Authenticate a request from its session token, if any
    ///
    /// Every failure is reported as `AuthError::Unauthorized`; the reason
    /// only distinguishes a missing token from a bad one.
    pub fn authenticate(&self, token: Option<&str>) -> Result<Identity, DomainError> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::Unauthorized(UnauthorizedReason::NoToken))?;

        let invalid = || AuthError::Unauthorized(UnauthorizedReason::InvalidToken);

        let claims = self
            .token_service
            .verify(token, TokenKind::Session)
            .map_err(|_| invalid())?;
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| invalid())?;

        Ok(Identity { user_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::token::Claims;
    use lf_shared::JwtConfig;

    fn setup(secret: &str) -> (AccessGuard, Arc<TokenService>) {
        let tokens = Arc::new(TokenService::new(JwtConfig::new(secret)));
        (AccessGuard::new(tokens.clone()), tokens)
    }

    fn is_unauthorized(result: Result<Identity, DomainError>, reason: UnauthorizedReason) -> bool {
        matches!(result, Err(DomainError::Auth(AuthError::Unauthorized(r))) if r == reason)
    }

    #[test]
    fn test_valid_session_token() {
        let (guard, tokens) = setup("secret");
        let user_id = Uuid::new_v4();
        let token = tokens.issue_session(user_id).unwrap();

        let identity = guard.authenticate(Some(&token)).unwrap();
        assert_eq!(identity.user_id, user_id);
    }

    #[test]
    fn test_missing_token() {
        let (guard, _) = setup("secret");
        assert!(is_unauthorized(guard.authenticate(None), UnauthorizedReason::NoToken));
        assert!(is_unauthorized(guard.authenticate(Some("")), UnauthorizedReason::NoToken));
    }

    #[test]
    fn test_foreign_secret_and_expired_tokens() {
        let (guard, _) = setup("secret");
        let (_, other) = setup("another-secret");

        let foreign = other.issue_session(Uuid::new_v4()).unwrap();
        assert!(is_unauthorized(
            guard.authenticate(Some(&foreign)),
            UnauthorizedReason::InvalidToken
        ));

        let (_, same) = setup("secret");
        let expired = same
            .sign(&Claims::new(Uuid::new_v4().to_string(), TokenKind::Session, -1))
            .unwrap();
        assert!(is_unauthorized(
            guard.authenticate(Some(&expired)),
            UnauthorizedReason::InvalidToken
        ));
    }

    #[test]
    fn test_pending_token_and_bad_subject() {
        let (guard, tokens) = setup("secret");

        let pending = tokens.issue_pending("ada@example.com").unwrap();
        assert!(is_unauthorized(
            guard.authenticate(Some(&pending)),
            UnauthorizedReason::InvalidToken
        ));

        let bad_subject = tokens
            .sign(&Claims::new("not-a-uuid", TokenKind::Session, 5))
            .unwrap();
        assert!(is_unauthorized(
            guard.authenticate(Some(&bad_subject)),
            UnauthorizedReason::InvalidToken
        ));
    }
}
