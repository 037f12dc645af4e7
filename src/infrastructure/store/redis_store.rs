//! Redis-backed mapping store.

use crate::domain::repositories::{StoreError, StoreResult, UrlStore};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisResult, aio::ConnectionManager};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Redis implementation of [`UrlStore`].
///
/// Uses a `ConnectionManager`, a multiplexed connection that reconnects on
/// failure and is cheap to clone, so every request works on its own handle.
/// Each command is bounded by `op_timeout`.
pub struct RedisUrlStore {
    conn: ConnectionManager,
    ttl_seconds: u64,
    op_timeout: Duration,
    key_prefix: String,
}

impl RedisUrlStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379/0"`)
    /// - `ttl` - expiry applied to every mapping; must be at least one second
    /// - `op_timeout` - upper bound for connecting and for each later command
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails, and [`StoreError::Timeout`]
    /// if Redis does not answer within `op_timeout`.
    pub async fn connect(redis_url: &str, ttl: Duration, op_timeout: Duration) -> StoreResult<Self> {
        let ttl_seconds = ttl.as_secs();
        if ttl_seconds == 0 {
            return Err(StoreError::Connection(
                "TTL must be at least one second".to_string(),
            ));
        }

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = tokio::time::timeout(op_timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| StoreError::Timeout(op_timeout))?
            .map_err(|e| StoreError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        tokio::time::timeout(op_timeout, test_conn.ping::<()>())
            .await
            .map_err(|_| StoreError::Timeout(op_timeout))?
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            conn: manager,
            ttl_seconds,
            op_timeout,
            key_prefix: "url:".to_string(),
        })
    }

    /// Replaces the namespace prefix put in front of every short code.
    pub fn with_prefix(mut self, key_prefix: impl Into<String>) -> Self {
        self.key_prefix = key_prefix.into();
        self
    }

    fn build_key(&self, short_code: &str) -> String {
        format!("{}{}", self.key_prefix, short_code)
    }

    async fn bounded<T, F>(&self, operation: &str, fut: F) -> StoreResult<T>
    where
        F: Future<Output = RedisResult<T>>,
    {
        match tokio::time::timeout(self.op_timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(StoreError::Operation(format!("{}: {}", operation, e))),
            Err(_) => {
                warn!("Redis {} timed out after {:?}", operation, self.op_timeout);
                Err(StoreError::Timeout(self.op_timeout))
            }
        }
    }
}

#[async_trait]
impl UrlStore for RedisUrlStore {
    async fn put(&self, short_code: &str, long_url: &str) -> StoreResult<()> {
        let key = self.build_key(short_code);
        let mut conn = self.conn.clone();

        self.bounded(
            "SET",
            conn.set_ex::<_, _, ()>(&key, long_url, self.ttl_seconds),
        )
        .await?;

        debug!(
            "Store SET: {} -> {} (TTL: {}s)",
            short_code, long_url, self.ttl_seconds
        );
        Ok(())
    }

    async fn put_if_absent(&self, short_code: &str, long_url: &str) -> StoreResult<bool> {
        let key = self.build_key(short_code);
        let mut conn = self.conn.clone();

        let mut cmd = redis::cmd("SET");
        cmd.arg(&key)
            .arg(long_url)
            .arg("NX")
            .arg("EX")
            .arg(self.ttl_seconds);

        let reply: Option<String> = self.bounded("SET NX", cmd.query_async(&mut conn)).await?;
        let written = reply.is_some();

        debug!("Store SET NX: {} (written: {})", short_code, written);
        Ok(written)
    }

    async fn get(&self, short_code: &str) -> StoreResult<Option<String>> {
        let key = self.build_key(short_code);
        let mut conn = self.conn.clone();

        let value = self
            .bounded("GET", conn.get::<_, Option<String>>(&key))
            .await?;

        match value {
            Some(url) if !url.is_empty() => {
                debug!("Store HIT: {}", short_code);
                Ok(Some(url))
            }
            _ => {
                debug!("Store MISS: {}", short_code);
                Ok(None)
            }
        }
    }

    async fn ping(&self) -> bool {
        let mut conn = self.conn.clone();
        self.bounded("PING", conn.ping::<()>()).await.is_ok()
    }
}
