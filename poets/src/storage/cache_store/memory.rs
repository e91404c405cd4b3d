use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::storage::errors::StorageError;
use crate::storage::types::CacheData;

use super::types::{CacheStore, InMemoryCacheStore, MemoryEntry};

impl InMemoryCacheStore {
    pub(crate) fn new() -> Self {
        tracing::info!("Using in-memory cache store; sessions will not survive a restart");
        Self {
            entries: HashMap::new(),
        }
    }

    fn entry_key(prefix: &str, key: &str) -> String {
        format!("cache:{prefix}:{key}")
    }

    fn purge_expired(&mut self, now: Instant) {
        self.entries.retain(|_, entry| entry.expires_at > now);
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn init(&self) -> Result<(), StorageError> {
        Ok(())
    }

    async fn put_with_ttl(
        &mut self,
        prefix: &str,
        key: &str,
        value: CacheData,
        ttl: usize,
    ) -> Result<(), StorageError> {
        let now = Instant::now();
        self.purge_expired(now);

        let expires_at = now + Duration::from_secs(ttl as u64);
        self.entries.insert(
            Self::entry_key(prefix, key),
            MemoryEntry {
                data: value,
                expires_at,
            },
        );
        Ok(())
    }

    async fn get(&self, prefix: &str, key: &str) -> Result<Option<CacheData>, StorageError> {
        let now = Instant::now();
        Ok(self
            .entries
            .get(&Self::entry_key(prefix, key))
            .filter(|entry| entry.expires_at > now)
            .map(|entry| entry.data.clone()))
    }

    async fn remove(&mut self, prefix: &str, key: &str) -> Result<(), StorageError> {
        self.entries.remove(&Self::entry_key(prefix, key));
        Ok(())
    }
}
