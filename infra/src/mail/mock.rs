//! Mock notifier implementation
//!
//! Logs codes instead of sending them and keeps the sent messages in memory
//! so tests can read the code back.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use lf_core::services::notifier::{NotifierTrait, OtpMessage};
use lf_shared::validation::mask_email;

/// Mock notifier for development and testing
#[derive(Clone, Default)]
pub struct MockNotifier {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: Arc<AtomicBool>,
    /// Messages accepted so far
    sent: Arc<Mutex<Vec<OtpMessage>>>,
}

impl MockNotifier {
    /// Create a new mock notifier
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    /// The most recent code sent to `email`
    pub fn last_code_for(&self, email: &str) -> Option<String> {
        let sent = self.sent.lock().ok()?;
        sent.iter()
            .rev()
            .find(|m| m.to == email)
            .map(|m| m.code.clone())
    }

    /// All messages sent so far
    pub fn sent_messages(&self) -> Vec<OtpMessage> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl NotifierTrait for MockNotifier {
    async fn send(&self, message: &OtpMessage) -> Result<(), String> {
        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(
                "Mock notifier simulating failure for {}",
                mask_email(&message.to)
            );
            return Err("Mock mail service failure".to_string());
        }

        info!(
            to = %mask_email(&message.to),
            code = %message.code,
            "Mock email: {}",
            message.subject
        );

        if let Ok(mut sent) = self.sent.lock() {
            sent.push(message.clone());
        }
        self.message_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
