//! Mail Service Module
//!
//! Delivery of one-time login codes. `SmtpNotifier` sends real email through
//! an SMTP relay; `MockNotifier` logs the code for development and tests.
//! Addresses are masked in logs.

pub mod mock;
pub mod smtp;


pub use mock::MockNotifier;
pub use smtp::SmtpNotifier;

use async_trait::async_trait;
use lf_core::services::notifier::{NotifierTrait, OtpMessage};
use lf_shared::{MailConfig, MailProvider};

use crate::InfrastructureError;

/// Notifier selected by configuration at start-up
pub enum EmailNotifier {
    Smtp(SmtpNotifier),
    Mock(MockNotifier),
}

#[async_trait]
impl NotifierTrait for EmailNotifier {
    async fn send(&self, message: &OtpMessage) -> Result<(), String> {
        match self {
            EmailNotifier::Smtp(n) => n.send(message).await,
            EmailNotifier::Mock(n) => n.send(message).await,
        }
    }
}

/// Create the notifier named by the mail configuration
///
/// # Errors
///
/// Fails when SMTP is selected but the relay or sender address is invalid.
pub fn create_notifier(config: &MailConfig) -> Result<EmailNotifier, InfrastructureError> {
    match config.provider {
        MailProvider::Smtp => {
            tracing::info!(host = %config.smtp_host, "Using SMTP mail delivery");
            Ok(EmailNotifier::Smtp(SmtpNotifier::new(config)?))
        }
        MailProvider::Mock => {
            tracing::warn!("Using mock mail delivery; codes are written to the log");
            Ok(EmailNotifier::Mock(MockNotifier::new()))
        }
    }
}
