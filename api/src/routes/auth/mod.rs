//! Authentication route handlers
//!
//! This module contains the OTP login flow and session endpoints:
//! - Registration
//! - Login (email a one-time code) and OTP verification
//! - Session status, profile and logout

pub mod check_auth;
pub mod login;
pub mod logout;
pub mod profile;
pub mod register;
pub mod verify_otp;

use std::sync::Arc;

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use lf_core::repositories::UserRepository;
use lf_core::services::auth::AuthService;
use lf_core::services::guard::AccessGuard;
use lf_core::services::notifier::NotifierTrait;
use lf_shared::{AuthConfig, CookieConfig};

/// Shared state of the auth endpoints
pub struct AuthState<U, N>
where
    U: UserRepository,
    N: NotifierTrait,
{
    pub auth_service: Arc<AuthService<U, N>>,
    pub guard: AccessGuard,
    pub cookies: SessionCookies,
}

impl<U, N> AuthState<U, N>
where
    U: UserRepository,
    N: NotifierTrait,
{
    pub fn new(auth_service: Arc<AuthService<U, N>>, config: &AuthConfig) -> Self {
        let guard = AccessGuard::new(auth_service.token_service().clone());
        Self {
            auth_service,
            guard,
            cookies: SessionCookies::new(config),
        }
    }
}

/// Builds the pending and session cookies
#[derive(Debug, Clone)]
pub struct SessionCookies {
    config: CookieConfig,
    pending_max_age: i64,
    session_max_age: i64,
}

impl SessionCookies {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            config: config.cookies.clone(),
            pending_max_age: config.pending_cookie_max_age(),
            session_max_age: config.session_cookie_max_age(),
        }
    }

    pub fn pending_name(&self) -> &str {
        &self.config.pending_name
    }

    pub fn session_name(&self) -> &str {
        &self.config.session_name
    }

    /// Cookie carrying a pending-verification token
    pub fn pending(&self, token: String) -> Cookie<'static> {
        self.build(self.config.pending_name.clone(), token, self.pending_max_age)
    }

    /// Cookie carrying a session token
    pub fn session(&self, token: String) -> Cookie<'static> {
        self.build(self.config.session_name.clone(), token, self.session_max_age)
    }

    /// Empty pending cookie that expires immediately
    pub fn clear_pending(&self) -> Cookie<'static> {
        self.build(self.config.pending_name.clone(), String::new(), 0)
    }

    /// Empty session cookie that expires immediately
    pub fn clear_session(&self) -> Cookie<'static> {
        self.build(self.config.session_name.clone(), String::new(), 0)
    }

    fn build(&self, name: String, value: String, max_age_secs: i64) -> Cookie<'static> {
        Cookie::build(name, value)
            .path("/")
            .http_only(true)
            .secure(self.config.secure)
            .same_site(parse_same_site(&self.config.same_site))
            .max_age(Duration::seconds(max_age_secs))
            .finish()
    }
}

fn parse_same_site(value: &str) -> SameSite {
    match value.to_ascii_lowercase().as_str() {
        "strict" => SameSite::Strict,
        "none" => SameSite::None,
        _ => SameSite::Lax,
    }
}
