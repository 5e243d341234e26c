//! Configuration module with business-specific sub-modules
//!
//! Configuration is loaded from environment variables (a `.env` file is
//! honoured at the binary edge). Each sub-module owns one logical area:
//! - `auth` - bearer token verification settings
//! - `cache` - Redis connection and TTL settings
//! - `database` - MySQL connection and pool settings
//! - `notify` - SMTP and SMS gateway settings
//! - `server` - HTTP server bind settings

pub mod auth;
pub mod cache;
pub mod database;
pub mod notify;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::AuthConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use notify::{NotifyConfig, SmsGatewayConfig, SmtpConfig};
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Cache configuration
    pub cache: CacheConfig,

    /// Notification delivery configuration
    pub notify: NotifyConfig,

    /// Bearer authentication configuration
    pub auth: AuthConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            notify: NotifyConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            notify: NotifyConfig::from_env(),
            auth: AuthConfig::from_env(),
        }
    }
}

/// Read an environment variable, falling back to a default
pub(crate) fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read and parse an environment variable, falling back to a default
pub(crate) fn env_parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
