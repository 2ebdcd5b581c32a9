//! Main authentication service implementation

use std::sync::Arc;

use chrono::{Duration, Utc};
use constant_time_eq::constant_time_eq;
use lf_shared::validation::mask_email;
use rand::Rng;
use uuid::Uuid;

use crate::domain::entities::token::TokenKind;
use crate::domain::entities::user::{OneTimeCode, User, OTP_MAX, OTP_MIN};
use crate::domain::value_objects::UserProfile;
use crate::errors::{AuthError, DomainResult, UnauthorizedReason};
use crate::repositories::UserRepository;
use crate::services::guard::{AccessGuard, Identity};
use crate::services::notifier::{NotifierTrait, OtpMessage};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Authentication service for managing the complete login flow
pub struct AuthService<U, N>
where
    U: UserRepository,
    N: NotifierTrait,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Outbound email for one-time codes
    notifier: Arc<N>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, N> AuthService<U, N>
where
    U: UserRepository,
    N: NotifierTrait,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `notifier` - Email delivery for one-time codes
    /// * `token_service` - Service for JWT token management
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        notifier: Arc<N>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            notifier,
            token_service,
            config,
        }
    }

    /// Register a new, unverified user
    ///
    /// # Errors
    ///
    /// * `AuthError::UserAlreadyExists` - the email is already registered
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        phone_number: &str,
    ) -> DomainResult<User> {
        if self.user_repository.find_by_email(email).await?.is_some() {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let user = User::new(name.to_string(), email.to_string(), phone_number.to_string());
        let user = self.user_repository.create(user).await?;

        tracing::info!(user_id = %user.id, email = %mask_email(email), "User registered");
        Ok(user)
    }

    /// Start a login: store a fresh one-time code, email it, and return a
    /// pending-verification token for the email
    ///
    /// The code is persisted before it is sent.
    ///
    /// # Errors
    ///
    /// * `AuthError::UserNotFound` - no user with this email
    /// * `AuthError::NotificationFailed` - the email could not be sent
    pub async fn login(&self, email: &str) -> DomainResult<String> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let code = generate_code();
        let expires_at = Utc::now() + Duration::minutes(self.config.otp_ttl_minutes);
        self.user_repository
            .set_otp(user.id, OneTimeCode::new(code.clone(), expires_at))
            .await?;

        let message = OtpMessage::login(email, &code, self.config.otp_ttl_minutes);
        if let Err(e) = self.notifier.send(&message).await {
            tracing::error!(
                user_id = %user.id,
                email = %mask_email(email),
                error = %e,
                "Failed to send login code"
            );
            return Err(AuthError::NotificationFailed.into());
        }

        tracing::info!(user_id = %user.id, "Login code sent");
        self.token_service.issue_pending(email)
    }

    /// Complete a login by checking the submitted code
    ///
    /// On success the stored code is cleared, the user is marked verified and
    /// a session token is returned.
    ///
    /// # Errors
    ///
    /// * `AuthError::Unauthorized` - no pending token was presented
    /// * `AuthError::SessionExpired` - the pending token is invalid or expired
    /// * `AuthError::InvalidOtp` - unknown user, wrong code or expired code
    pub async fn verify_otp(&self, pending_token: Option<&str>, code: &str) -> DomainResult<String> {
        let pending_token = pending_token
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::Unauthorized(UnauthorizedReason::NoSessionToken))?;

        let claims = self
            .token_service
            .verify(pending_token, TokenKind::Pending)
            .map_err(|_| AuthError::SessionExpired)?;

        let user = self
            .user_repository
            .find_by_email(&claims.sub)
            .await?
            .ok_or(AuthError::InvalidOtp)?;

        let stored = user.otp.as_ref().ok_or(AuthError::InvalidOtp)?;
        let matches = constant_time_eq(stored.code.as_bytes(), code.trim().as_bytes());
        if !matches || stored.is_expired_at(Utc::now()) {
            tracing::warn!(user_id = %user.id, "Rejected login code");
            return Err(AuthError::InvalidOtp.into());
        }

        self.user_repository.mark_verified(user.id).await?;

        tracing::info!(user_id = %user.id, "User verified");
        self.token_service.issue_session(user.id)
    }

    /// Resolve a session token into the caller's identity
    ///
    /// # Errors
    ///
    /// * `AuthError::Unauthorized` - token missing, malformed or expired
    pub fn check_status(&self, token: Option<&str>) -> DomainResult<Identity> {
        AccessGuard::new(self.token_service.clone()).authenticate(token)
    }

    /// Profile of an authenticated user
    ///
    /// # Errors
    ///
    /// * `AuthError::UserNotFound` - the id no longer resolves
    pub async fn get_profile(&self, user_id: Uuid) -> DomainResult<UserProfile> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        Ok(UserProfile::from(user))
    }

    /// The token service used for signing and verification
    pub fn token_service(&self) -> &Arc<TokenService> {
        &self.token_service
    }
}

/// Six-digit code, uniform over the whole range
pub(super) fn generate_code() -> String {
    rand::thread_rng().gen_range(OTP_MIN..=OTP_MAX).to_string()
}
