//! Outbound delivery of one-time login codes

use async_trait::async_trait;

/// An email carrying a one-time login code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
    /// The bare code, for notifiers that log instead of sending
    pub code: String,
}

impl OtpMessage {
    /// Build the login email for `code`
    pub fn login(to: &str, code: &str, ttl_minutes: i64) -> Self {
        Self {
            to: to.to_string(),
            subject: "Your Login OTP".to_string(),
            body: format!(
                "Your OTP is {}. It is valid for {} minutes.",
                code, ttl_minutes
            ),
            code: code.to_string(),
        }
    }
}

/// Trait for email delivery integration
///
/// Delivery is reported synchronously: `Ok` means the message was accepted
/// by the transport.
#[async_trait]
pub trait NotifierTrait: Send + Sync {
    /// Send the message, returning a transport error description on failure
    async fn send(&self, message: &OtpMessage) -> Result<(), String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_message_text() {
        let msg = OtpMessage::login("ada@example.com", "123456", 10);
        assert_eq!(msg.subject, "Your Login OTP");
        assert_eq!(msg.body, "Your OTP is 123456. It is valid for 10 minutes.");
        assert_eq!(msg.to, "ada@example.com");
    }
}
