//! # Infrastructure Layer
//!
//! Concrete implementations behind the core repository and collaborator
//! traits:
//! - **database**: MySQL repositories using SQLx
//! - **cache**: Redis client and the `CacheStore` implementation
//! - **notify**: SMTP email, SMS gateway, and mock notifiers

pub mod cache;
pub mod database;
pub mod notify;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfraError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Notification delivery error
    #[error("Notification error: {0}")]
    Notify(String),
}
