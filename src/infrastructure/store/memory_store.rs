//! In-process mapping store.

use crate::domain::repositories::{StoreResult, UrlStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

struct Entry {
    long_url: String,
    expires_at: Instant,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// A [`UrlStore`] kept in process memory.
///
/// Expiry follows the tokio clock, so tests can pause and advance time. A
/// zero TTL makes every mapping expire at the instant it is written.
/// Expired entries are purged on every write.
pub struct MemoryUrlStore {
    entries: RwLock<HashMap<String, Entry>>,
    ttl: Duration,
}

impl MemoryUrlStore {
    /// Creates an empty store applying `ttl` to every write.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Number of mappings that have not expired yet.
    pub async fn live_count(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .values()
            .filter(|entry| entry.is_live(now))
            .count()
    }

    fn entry(&self, long_url: &str) -> Entry {
        Entry {
            long_url: long_url.to_string(),
            expires_at: Instant::now() + self.ttl,
        }
    }
}

#[async_trait]
impl UrlStore for MemoryUrlStore {
    async fn put(&self, short_code: &str, long_url: &str) -> StoreResult<()> {
        let mut entries = self.entries.write().await;
        let now = Instant::now();
        entries.retain(|_, entry| entry.is_live(now));
        entries.insert(short_code.to_string(), self.entry(long_url));
        Ok(())
    }

    async fn put_if_absent(&self, short_code: &str, long_url: &str) -> StoreResult<bool> {
        let mut entries = self.entries.write().await;
        let now = Instant::now();
        entries.retain(|_, entry| entry.is_live(now));

        if entries.contains_key(short_code) {
            return Ok(false);
        }

        entries.insert(short_code.to_string(), self.entry(long_url));
        Ok(true)
    }

    async fn get(&self, short_code: &str) -> StoreResult<Option<String>> {
        let now = Instant::now();
        let entries = self.entries.read().await;

        Ok(entries
            .get(short_code)
            .filter(|entry| entry.is_live(now) && !entry.long_url.is_empty())
            .map(|entry| entry.long_url.clone()))
    }

    async fn ping(&self) -> bool {
        true
    }
}
