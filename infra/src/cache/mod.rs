//! Redis caching layer

pub mod redis_client;
pub mod redis_store;

pub use redis_client::RedisClient;
pub use redis_store::RedisCacheStore;
