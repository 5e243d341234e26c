//! SMS delivery through an HTTP gateway.
//!
//! Speaks a minimal JSON protocol shared by the regional gateways we use:
//! POST {to, message, sender_id} with basic auth, 2xx on acceptance.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use mr_shared::config::SmsGatewayConfig;
use mr_shared::utils::masking::mask_phone;

use crate::InfraError;

#[derive(Serialize)]
struct SendRequest<'a> {
    to: &'a str,
    message: &'a str,
    sender_id: &'a str,
}

/// HTTP client for the SMS gateway
pub struct SmsGatewayClient {
    http: reqwest::Client,
    config: SmsGatewayConfig,
    auth_header: String,
}

impl SmsGatewayClient {
    pub fn new(config: SmsGatewayConfig) -> Result<Self, InfraError> {
        if config.api_url.is_empty() {
            return Err(InfraError::Config("SMS_API_URL not set".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(InfraError::Http)?;

        let auth_header = format!(
            "Basic {}",
            BASE64.encode(format!("{}:{}", config.api_key, config.api_secret))
        );

        Ok(Self {
            http,
            config,
            auth_header,
        })
    }

    /// Send one SMS; any non-2xx response is an error
    pub async fn send(&self, to: &str, message: &str) -> Result<(), InfraError> {
        let request = SendRequest {
            to,
            message,
            sender_id: &self.config.sender_id,
        };

        let response = self
            .http
            .post(&self.config.api_url)
            .header("Authorization", &self.auth_header)
            .json(&request)
            .send()
            .await
            .map_err(InfraError::Http)?;

        if !response.status().is_success() {
            return Err(InfraError::Notify(format!(
                "SMS gateway returned {}",
                response.status()
            )));
        }

        debug!(to = %mask_phone(to), "SMS dispatched");

        Ok(())
    }
}
