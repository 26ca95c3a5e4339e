use std::{collections::HashMap, time::Duration};

use async_trait::async_trait;
use tokio::{sync::RwLock, time::Instant};

use crate::{
    application::{
        error::ApplicationError, repositories::shorts_cache_repository::ShortsCacheRepository,
    },
    domain::models::short_video::ShortVideo,
};

struct CacheEntry {
    shorts: Vec<ShortVideo>,
    expires_at: Instant,
}

/// Process-local TTL cache, used when no Redis instance is configured.
///
/// Expiry follows tokio's clock, so a paused runtime controls it in tests.
#[derive(Default)]
pub struct MemoryShortsCacheRepository {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryShortsCacheRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShortsCacheRepository for MemoryShortsCacheRepository {
    async fn get(&self, key: &str) -> Result<Option<Vec<ShortVideo>>, ApplicationError> {
        let now = Instant::now();
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                None => return Ok(None),
                Some(entry) if entry.expires_at > now => return Ok(Some(entry.shorts.clone())),
                Some(_) => {}
            }
        }

        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(|e| e.expires_at <= now) {
            entries.remove(key);
        }
        Ok(None)
    }

    async fn put(
        &self,
        key: &str,
        shorts: &[ShortVideo],
        ttl: Duration,
    ) -> Result<(), ApplicationError> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(
            key.to_string(),
            CacheEntry {
                shorts: shorts.to_vec(),
                expires_at: now + ttl,
            },
        );
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
