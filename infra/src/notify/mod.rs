//! Notification delivery: SMTP email, SMS gateway, and a console mock.

pub mod mock;
pub mod sms_gateway;
pub mod smtp;

pub use mock::MockNotifier;
pub use sms_gateway::SmsGatewayClient;
pub use smtp::SmtpMailer;

use async_trait::async_trait;

use mr_core::services::notifier::Notifier;

/// Production notifier: email over SMTP, SMS over the HTTP gateway.
///
/// All callers treat delivery as best-effort, so errors are stringly typed
/// at this boundary and logged by the services.
pub struct GatewayNotifier {
    mailer: SmtpMailer,
    sms: SmsGatewayClient,
}

impl GatewayNotifier {
    pub fn new(mailer: SmtpMailer, sms: SmsGatewayClient) -> Self {
        Self { mailer, sms }
    }
}

#[async_trait]
impl Notifier for GatewayNotifier {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        self.mailer
            .send(to, subject, body)
            .await
            .map_err(|e| e.to_string())
    }

    async fn send_sms(&self, to: &str, message: &str) -> Result<(), String> {
        self.sms.send(to, message).await.map_err(|e| e.to_string())
    }
}
