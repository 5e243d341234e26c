//! Notification delivery configuration (SMTP + SMS gateway)

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse_or};

/// SMTP configuration for outbound email
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmtpConfig {
    /// SMTP relay host
    pub host: String,

    /// SMTP relay port
    pub port: u16,

    /// SMTP username
    pub username: String,

    /// SMTP password
    pub password: String,

    /// From address for outbound mail
    pub from_address: String,

    /// Base URL of the frontend, used to build reset links
    pub frontend_url: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: String::from("localhost"),
            port: 587,
            username: String::new(),
            password: String::new(),
            from_address: String::from("no-reply@motoride.rw"),
            frontend_url: String::from("http://localhost:3000"),
        }
    }
}

/// SMS gateway configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsGatewayConfig {
    /// Provider name ("gateway" or "mock")
    pub provider: String,

    /// Gateway API endpoint
    pub api_url: String,

    /// API key for basic auth
    pub api_key: String,

    /// API secret for basic auth
    pub api_secret: String,

    /// Sender id shown to recipients
    pub sender_id: String,
}

impl Default for SmsGatewayConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            api_url: String::new(),
            api_key: String::new(),
            api_secret: String::new(),
            sender_id: String::from("MotoRide"),
        }
    }
}

/// Combined notification configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NotifyConfig {
    /// Email delivery settings
    pub smtp: SmtpConfig,

    /// SMS delivery settings
    pub sms: SmsGatewayConfig,
}

impl NotifyConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            smtp: SmtpConfig {
                host: env_or("SMTP_HOST", "localhost"),
                port: env_parse_or("SMTP_PORT", 587),
                username: env_or("SMTP_USERNAME", ""),
                password: env_or("SMTP_PASSWORD", ""),
                from_address: env_or("SMTP_FROM", "no-reply@motoride.rw"),
                frontend_url: env_or("FRONTEND_URL", "http://localhost:3000"),
            },
            sms: SmsGatewayConfig {
                provider: env_or("SMS_PROVIDER", "mock"),
                api_url: env_or("SMS_API_URL", ""),
                api_key: env_or("SMS_API_KEY", ""),
                api_secret: env_or("SMS_API_SECRET", ""),
                sender_id: env_or("SMS_SENDER_ID", "MotoRide"),
            },
        }
    }
}
