//! Authentication configuration: token signing, OTP lifetime and cookies

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// HMAC secret used to sign both token kinds
    pub secret: String,

    /// Lifetime of the pending-verification token in minutes
    pub pending_token_ttl_minutes: i64,

    /// Lifetime of the authenticated session token in minutes
    pub session_token_ttl_minutes: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            pending_token_ttl_minutes: 10,
            session_token_ttl_minutes: 120,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// One-time code configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Minutes a freshly issued code stays valid
    pub ttl_minutes: i64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self { ttl_minutes: 10 }
    }
}

/// Cookie configuration for the two session cookies
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CookieConfig {
    /// Cookie carrying the pending-verification token
    pub pending_name: String,

    /// Cookie carrying the authenticated session token
    pub session_name: String,

    /// Secure flag (HTTPS only)
    pub secure: bool,

    /// SameSite attribute
    pub same_site: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            pending_name: String::from("temp-token"),
            session_name: String::from("token"),
            secure: false,
            same_site: String::from("Lax"),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// OTP configuration
    #[serde(default)]
    pub otp: OtpConfig,

    /// Cookie configuration
    #[serde(default)]
    pub cookies: CookieConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string());
        let pending_token_ttl_minutes = std::env::var("PENDING_TOKEN_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);
        let session_token_ttl_minutes = std::env::var("SESSION_TOKEN_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(120);
        let otp_ttl_minutes = std::env::var("OTP_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Self {
            jwt: JwtConfig {
                secret,
                pending_token_ttl_minutes,
                session_token_ttl_minutes,
            },
            otp: OtpConfig {
                ttl_minutes: otp_ttl_minutes,
            },
            cookies: CookieConfig::default(),
        }
    }

    /// Max-age of the pending cookie in seconds
    pub fn pending_cookie_max_age(&self) -> i64 {
        self.jwt.pending_token_ttl_minutes * 60
    }

    /// Max-age of the session cookie in seconds
    pub fn session_cookie_max_age(&self) -> i64 {
        self.jwt.session_token_ttl_minutes * 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.pending_token_ttl_minutes, 10);
        assert_eq!(config.session_token_ttl_minutes, 120);
        assert!(config.is_using_default_secret());
        assert!(!JwtConfig::new("my-secret").is_using_default_secret());
    }

    #[test]
    fn test_cookie_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.cookies.pending_name, "temp-token");
        assert_eq!(config.cookies.session_name, "token");
        assert_eq!(config.pending_cookie_max_age(), 600);
        assert_eq!(config.session_cookie_max_age(), 7200);
        assert_eq!(config.otp.ttl_minutes, 10);
    }
}
