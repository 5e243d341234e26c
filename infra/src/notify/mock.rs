//! Mock notifier for development and testing.
//!
//! Logs messages instead of delivering them, mirroring how the original
//! deployment ran before a provider was wired up.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

use mr_core::services::notifier::Notifier;
use mr_shared::utils::masking::{mask_email, mask_phone};

/// Notifier that logs to the console and counts deliveries
#[derive(Clone)]
pub struct MockNotifier {
    email_count: Arc<AtomicU64>,
    sms_count: Arc<AtomicU64>,
    simulate_failure: bool,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            email_count: Arc::new(AtomicU64::new(0)),
            sms_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
        }
    }

    /// A mock that fails every delivery, for exercising the best-effort paths
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::new()
        }
    }

    pub fn email_count(&self) -> u64 {
        self.email_count.load(Ordering::SeqCst)
    }

    pub fn sms_count(&self) -> u64 {
        self.sms_count.load(Ordering::SeqCst)
    }
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        if self.simulate_failure {
            return Err("simulated email failure".to_string());
        }
        self.email_count.fetch_add(1, Ordering::SeqCst);
        info!(to = %mask_email(to), subject, body, "mock email");
        Ok(())
    }

    async fn send_sms(&self, to: &str, message: &str) -> Result<(), String> {
        if self.simulate_failure {
            return Err("simulated SMS failure".to_string());
        }
        self.sms_count.fetch_add(1, Ordering::SeqCst);
        info!(to = %mask_phone(to), message, "mock SMS");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_counts_deliveries() {
        let notifier = MockNotifier::new();
        notifier.send_email("a@x.com", "hi", "body").await.unwrap();
        notifier.send_sms("+250700000001", "hi").await.unwrap();
        notifier.send_sms("+250700000001", "again").await.unwrap();
        assert_eq!(notifier.email_count(), 1);
        assert_eq!(notifier.sms_count(), 2);
    }

    #[tokio::test]
    async fn test_failing_mock() {
        let notifier = MockNotifier::failing();
        assert!(notifier.send_email("a@x.com", "hi", "body").await.is_err());
        assert!(notifier.send_sms("+250700000001", "hi").await.is_err());
        assert_eq!(notifier.email_count(), 0);
    }
}
