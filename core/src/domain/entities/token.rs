//! Token claims for JWT-based sessions.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// What a token vouches for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Login requested for an email, OTP not yet verified. Subject is the email.
    Pending,
    /// Authenticated user. Subject is the user id.
    Session,
}

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (email for pending tokens, user id for session tokens)
    pub sub: String,

    /// Token kind
    pub kind: TokenKind,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims that expire `ttl_minutes` from now
    pub fn new(sub: impl Into<String>, kind: TokenKind, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(ttl_minutes);

        Self {
            sub: sub.into(),
            kind,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = Claims::new("ada@example.com", TokenKind::Pending, 10);
        assert_eq!(claims.exp - claims.iat, 600);
        assert_eq!(claims.sub, "ada@example.com");
    }

    #[test]
    fn test_negative_ttl_expires_before_issue() {
        let claims = Claims::new("x", TokenKind::Session, -1);
        assert_eq!(claims.exp - claims.iat, -60);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_value(TokenKind::Session).unwrap();
        assert_eq!(json, "session");
    }
}
