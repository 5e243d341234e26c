//! Outbound notification boundary.

use async_trait::async_trait;

/// Trait for delivering email and SMS to account holders.
///
/// Delivery is best-effort everywhere it is used: callers log failures and
/// never surface them to the client or roll back state on account of them.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send an email message
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String>;

    /// Send an SMS message
    async fn send_sms(&self, to: &str, message: &str) -> Result<(), String>;
}
