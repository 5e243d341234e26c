//! Shared utilities and common types for the MotoRide server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - API response structures
//! - Utility functions (phone/email validation, masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CacheConfig, DatabaseConfig, NotifyConfig, ServerConfig,
};
pub use types::response::ApiResponse;
pub use utils::{masking, validation};
