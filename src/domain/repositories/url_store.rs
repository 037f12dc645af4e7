//! Storage contract for short code → long URL mappings.

use async_trait::async_trait;
use std::time::Duration;

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    Connection(String),

    #[error("Store operation error: {0}")]
    Operation(String),

    #[error("Store operation timed out after {0:?}")]
    Timeout(Duration),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Key/value store holding short URL mappings.
///
/// Every write uses the same global TTL chosen when the store is built; there
/// is no per-mapping override. Implementations must be safe to share between
/// concurrently running request handlers.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisUrlStore`] - Redis-backed production store
/// - [`crate::infrastructure::store::MemoryUrlStore`] - In-process store for tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Writes `long_url` under `short_code`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backend rejects the write or does
    /// not answer in time. The mapping is then not guaranteed to exist.
    async fn put(&self, short_code: &str, long_url: &str) -> StoreResult<()>;

    /// Writes `long_url` under `short_code` only if the code is free.
    ///
    /// Returns `Ok(true)` when the mapping was written and `Ok(false)` when a
    /// live mapping already occupies the code.
    async fn put_if_absent(&self, short_code: &str, long_url: &str) -> StoreResult<bool>;

    /// Reads the long URL stored under `short_code`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` for a live mapping
    /// - `Ok(None)` if the code was never written, has expired, or holds an empty value
    async fn get(&self, short_code: &str) -> StoreResult<Option<String>>;

    /// Checks if the backend is reachable.
    async fn ping(&self) -> bool;
}
