//! Outbound mail configuration

use serde::{Deserialize, Serialize};

/// Mail delivery backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Relay through an SMTP server
    Smtp,
    /// Log messages instead of sending them
    #[default]
    Mock,
}

impl std::str::FromStr for MailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "smtp" | "gmail" => Ok(MailProvider::Smtp),
            "mock" | "console" => Ok(MailProvider::Mock),
            _ => Err(format!("Invalid mail provider: {}", s)),
        }
    }
}

/// Mail configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Delivery backend
    pub provider: MailProvider,

    /// SMTP relay host
    pub smtp_host: String,

    /// SMTP username
    pub username: String,

    /// SMTP password
    #[serde(skip_serializing)]
    pub password: String,

    /// Sender address
    pub from: String,

    /// SMTP timeout in seconds
    pub timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProvider::default(),
            smtp_host: String::from("smtp.gmail.com"),
            username: String::new(),
            password: String::new(),
            from: String::from("no-reply@localhost"),
            timeout_secs: 30,
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let provider = std::env::var("MAIL_PROVIDER")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.provider);
        let username = std::env::var("EMAIL_USER").unwrap_or_default();
        let from = std::env::var("MAIL_FROM")
            .ok()
            .or_else(|| (!username.is_empty()).then(|| username.clone()))
            .unwrap_or(defaults.from);

        Self {
            provider,
            smtp_host: std::env::var("SMTP_HOST").unwrap_or(defaults.smtp_host),
            username,
            password: std::env::var("EMAIL_PASS").unwrap_or_default(),
            from,
            timeout_secs: defaults.timeout_secs,
        }
    }
}
