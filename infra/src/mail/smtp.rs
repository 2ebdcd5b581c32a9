//! SMTP notifier built on lettre's async transport

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use lf_core::services::notifier::{NotifierTrait, OtpMessage};
use lf_shared::validation::mask_email;
use lf_shared::MailConfig;

use crate::InfrastructureError;

/// Sends one-time codes through an authenticated STARTTLS relay
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpNotifier {
    /// Build the transport; no connection is made until the first send
    pub fn new(config: &MailConfig) -> Result<Self, InfrastructureError> {
        if config.username.is_empty() || config.password.is_empty() {
            return Err(InfrastructureError::Config(
                "EMAIL_USER and EMAIL_PASS are required for SMTP delivery".to_string(),
            ));
        }

        let from: Mailbox = config
            .from
            .parse()
            .map_err(|e| InfrastructureError::Config(format!("Invalid sender address: {}", e)))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| InfrastructureError::Config(format!("Invalid SMTP relay: {}", e)))?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .timeout(Some(Duration::from_secs(config.timeout_secs)))
            .build();

        Ok(Self { transport, from })
    }

    fn build_message(&self, message: &OtpMessage) -> Result<Message, InfrastructureError> {
        let to: Mailbox = message
            .to
            .parse()
            .map_err(|e| InfrastructureError::Mail(format!("Invalid recipient: {}", e)))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())
            .map_err(|e| InfrastructureError::Mail(e.to_string()))
    }
}

#[async_trait]
impl NotifierTrait for SmtpNotifier {
    async fn send(&self, message: &OtpMessage) -> Result<(), String> {
        let email = self.build_message(message).map_err(|e| e.to_string())?;

        self.transport.send(email).await.map_err(|e| {
            tracing::error!(to = %mask_email(&message.to), error = %e, "SMTP delivery failed");
            InfrastructureError::Mail(e.to_string()).to_string()
        })?;

        tracing::debug!(to = %mask_email(&message.to), "Login code delivered");
        Ok(())
    }
}
