//! Cache store boundary.

use async_trait::async_trait;

/// Trait for a shared key/value cache with per-entry TTL.
///
/// Injected into the services that need it; there is no ambient global
/// cache handle anywhere in the domain layer.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Fetch a value; `None` for a missing or expired key
    async fn get(&self, key: &str) -> Result<Option<String>, String>;

    /// Store a value with a time-to-live in seconds
    async fn set_with_ttl(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String>;

    /// Delete a key; returns whether a key was removed
    async fn delete(&self, key: &str) -> Result<bool, String>;
}
