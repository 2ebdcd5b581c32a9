//! Main token service implementation

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use lf_shared::JwtConfig;
use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenKind};
use crate::errors::{DomainError, TokenError};

/// Service for signing and verifying JWTs
pub struct TokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from the JWT configuration
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Signs arbitrary claims
    pub fn sign(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Issues a pending-verification token whose subject is the email
    pub fn issue_pending(&self, email: &str) -> Result<String, DomainError> {
        let claims = Claims::new(
            email,
            TokenKind::Pending,
            self.config.pending_token_ttl_minutes,
        );
        self.sign(&claims)
    }

    /// Issues an authenticated session token whose subject is the user id
    pub fn issue_session(&self, user_id: Uuid) -> Result<String, DomainError> {
        let claims = Claims::new(
            user_id.to_string(),
            TokenKind::Session,
            self.config.session_token_ttl_minutes,
        );
        self.sign(&claims)
    }

    /// Verifies a token and returns its claims
    ///
    /// # Errors
    ///
    /// * `TokenError::TokenExpired` - the token is past its expiry
    /// * `TokenError::InvalidSignature` - malformed, tampered, signed with
    ///   another secret, or of a different kind than `expected`
    pub fn verify(&self, token: &str, expected: TokenKind) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => DomainError::Token(TokenError::TokenExpired),
                _ => DomainError::Token(TokenError::InvalidSignature),
            })?;

        if token_data.claims.kind != expected {
            return Err(DomainError::Token(TokenError::InvalidSignature));
        }

        Ok(token_data.claims)
    }
}
