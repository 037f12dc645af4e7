//! Mapping store implementations.
//!
//! - [`RedisUrlStore`] - Production Redis-backed store
//! - [`MemoryUrlStore`] - In-process store with tokio-clock expiry

mod memory_store;
mod redis_store;

pub use memory_store::MemoryUrlStore;
pub use redis_store::RedisUrlStore;
