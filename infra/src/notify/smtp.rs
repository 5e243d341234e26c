//! SMTP email delivery via lettre.

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use mr_shared::config::SmtpConfig;
use mr_shared::utils::masking::mask_email;

use crate::InfraError;

/// Async SMTP mailer
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Build a relay transport from configuration
    pub fn new(config: &SmtpConfig) -> Result<Self, InfraError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| InfraError::Config(format!("Invalid SMTP relay: {}", e)))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        let from = config
            .from_address
            .parse()
            .map_err(|e| InfraError::Config(format!("Invalid from address: {}", e)))?;

        Ok(Self { transport, from })
    }

    /// Send a plain-text email
    pub async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), InfraError> {
        let to_mailbox: Mailbox = to
            .parse()
            .map_err(|e| InfraError::Notify(format!("Invalid recipient address: {}", e)))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to_mailbox)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| InfraError::Notify(format!("Failed to build message: {}", e)))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| InfraError::Notify(format!("SMTP send failed: {}", e)))?;

        debug!(to = %mask_email(to), "email dispatched");

        Ok(())
    }
}
