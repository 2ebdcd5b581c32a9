//! Configuration for the authentication service

use lf_shared::AuthConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Lifetime of a one-time code in minutes
    pub otp_ttl_minutes: i64,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self { otp_ttl_minutes: 10 }
    }
}

impl From<&AuthConfig> for AuthServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            otp_ttl_minutes: config.otp.ttl_minutes,
        }
    }
}
