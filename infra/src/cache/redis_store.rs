//! `CacheStore` implementation over the Redis client.

use async_trait::async_trait;

use mr_core::services::cache::CacheStore;

use super::RedisClient;

/// Redis-backed cache store injected into the profile service
#[derive(Clone)]
pub struct RedisCacheStore {
    client: RedisClient,
}

impl RedisCacheStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        self.client.get(key).await.map_err(|e| e.to_string())
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String> {
        self.client
            .set_with_expiry(key, value, ttl_seconds)
            .await
            .map_err(|e| e.to_string())
    }

    async fn delete(&self, key: &str) -> Result<bool, String> {
        self.client.delete(key).await.map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mr_shared::config::CacheConfig;

    // Exercises a real Redis instance; run with `cargo test -- --ignored`
    // when one is available.
    #[tokio::test]
    #[ignore]
    async fn test_round_trip_against_redis() {
        let config = CacheConfig {
            url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            ..Default::default()
        };
        let client = RedisClient::new(&config).await.unwrap();
        let store = RedisCacheStore::new(client);

        store
            .set_with_ttl("test:riders", "[{\"id\":1}]", 60)
            .await
            .unwrap();
        assert_eq!(
            store.get("test:riders").await.unwrap().as_deref(),
            Some("[{\"id\":1}]")
        );
        assert!(store.delete("test:riders").await.unwrap());
        assert_eq!(store.get("test:riders").await.unwrap(), None);
    }
}
