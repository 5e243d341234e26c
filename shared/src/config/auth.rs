//! Bearer authentication configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Settings for validating bearer tokens on authenticated endpoints.
///
/// Token issuance lives in the identity service; this subsystem only
/// verifies signatures.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// HS256 signing secret shared with the identity service
    pub jwt_secret: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("dev-secret-change-me"),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            jwt_secret: env_or("JWT_SECRET", "dev-secret-change-me"),
        }
    }
}
