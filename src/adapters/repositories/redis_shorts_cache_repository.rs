use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::debug;

use crate::{
    application::{
        error::ApplicationError, repositories::shorts_cache_repository::ShortsCacheRepository,
    },
    domain::models::short_video::ShortVideo,
};

pub struct RedisShortsCacheRepository {
    client: redis::aio::ConnectionManager,
}

impl RedisShortsCacheRepository {
    pub fn new(client: redis::aio::ConnectionManager) -> Self {
        Self { client }
    }

    fn get_redis_key(key: &str) -> String {
        format!("talkak:{}", key)
    }
}

#[async_trait]
impl ShortsCacheRepository for RedisShortsCacheRepository {
    async fn get(&self, key: &str) -> Result<Option<Vec<ShortVideo>>, ApplicationError> {
        let redis_key = Self::get_redis_key(key);
        let mut conn = self.client.clone();

        let value: Option<String> = conn.get(&redis_key).await.map_err(|e| {
            ApplicationError::InternalError(format!("Failed to read shorts cache: {}", e))
        })?;

        match value {
            None => Ok(None),
            Some(json) => {
                let shorts = serde_json::from_str(&json).map_err(|e| {
                    ApplicationError::InternalError(format!("Corrupt shorts cache entry: {}", e))
                })?;
                Ok(Some(shorts))
            }
        }
    }

    async fn put(
        &self,
        key: &str,
        shorts: &[ShortVideo],
        ttl: Duration,
    ) -> Result<(), ApplicationError> {
        let redis_key = Self::get_redis_key(key);
        let json = serde_json::to_string(shorts).map_err(|e| {
            ApplicationError::InternalError(format!("Failed to encode shorts: {}", e))
        })?;
        // SET EX rejects a zero expiry.
        let ttl_seconds = ttl.as_secs().max(1);

        let mut conn = self.client.clone();
        conn.set_ex::<_, _, ()>(&redis_key, json, ttl_seconds)
            .await
            .map_err(|e| {
                ApplicationError::InternalError(format!("Failed to write shorts cache: {}", e))
            })?;

        debug!("Cached {} shorts under '{}' for {}s", shorts.len(), redis_key, ttl_seconds);
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
