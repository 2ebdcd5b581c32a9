//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - Token signing, OTP lifetime and cookie configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `mail` - Outbound email (OTP delivery) configuration
//! - `server` - HTTP server and CORS configuration
//! - `upload` - Uploaded media storage limits

pub mod auth;
pub mod database;
pub mod environment;
pub mod mail;
pub mod server;
pub mod upload;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, CookieConfig, JwtConfig, OtpConfig};
pub use database::DatabaseConfig;
pub use environment::{Environment, LoggingConfig};
pub use mail::{MailConfig, MailProvider};
pub use server::{CorsConfig, ServerConfig};
pub use upload::UploadConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Upload storage configuration
    pub upload: UploadConfig,

    /// Outbound mail configuration
    pub mail: MailConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            upload: UploadConfig::default(),
            mail: MailConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Callers are expected to have loaded any `.env` file beforehand.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let mut auth = AuthConfig::from_env();
        // Cookies only travel over HTTPS in production
        auth.cookies.secure = environment.is_production();

        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth,
            upload: UploadConfig::from_env(),
            mail: MailConfig::from_env(),
            cors: CorsConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }
}
