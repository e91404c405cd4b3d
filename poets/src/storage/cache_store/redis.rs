use async_trait::async_trait;
use redis::{AsyncCommands, aio::MultiplexedConnection};

use crate::storage::errors::StorageError;
use crate::storage::types::CacheData;

use super::types::{CacheStore, RedisCacheStore};

impl RedisCacheStore {
    fn entry_key(prefix: &str, key: &str) -> String {
        format!("cache:{prefix}:{key}")
    }

    async fn connection(&self) -> Result<MultiplexedConnection, StorageError> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn init(&self) -> Result<(), StorageError> {
        let mut conn = self.connection().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        tracing::info!("Connected to Redis cache store");
        Ok(())
    }

    // Redis expires the key itself, so readers never see a stale record.
    async fn put_with_ttl(
        &mut self,
        prefix: &str,
        key: &str,
        value: CacheData,
        ttl: usize,
    ) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(&value)?;
        let _: () = self
            .connection()
            .await?
            .set_ex(Self::entry_key(prefix, key), encoded, ttl as u64)
            .await?;
        Ok(())
    }

    async fn get(&self, prefix: &str, key: &str) -> Result<Option<CacheData>, StorageError> {
        let raw: Option<String> = self
            .connection()
            .await?
            .get(Self::entry_key(prefix, key))
            .await?;

        raw.map(|s| serde_json::from_str(&s))
            .transpose()
            .map_err(StorageError::from)
    }

    async fn remove(&mut self, prefix: &str, key: &str) -> Result<(), StorageError> {
        let _: () = self
            .connection()
            .await?
            .del(Self::entry_key(prefix, key))
            .await?;
        Ok(())
    }
}
