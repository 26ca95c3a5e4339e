use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::{
    application::{error::ApplicationError, repositories::shorts_cache_repository::ShortsCacheRepository},
    domain::models::short_video::ShortVideo,
};

const CACHE_KEY_PREFIX: &str = "shorts:popular";

/// Source of popular short videos, usually the platform's search API.
#[async_trait]
pub trait ShortsProvider: Send + Sync {
    /// `None` searches across all categories.
    async fn search_popular_shorts(
        &self,
        category_id: Option<i64>,
    ) -> Result<Vec<ShortVideo>, ApplicationError>;
}

/// Read-through cache in front of a [`ShortsProvider`], keyed by category.
pub struct ShortsService {
    provider: Arc<dyn ShortsProvider>,
    cache: Arc<dyn ShortsCacheRepository>,
    ttl: Duration,
}

impl ShortsService {
    pub fn new(
        provider: Arc<dyn ShortsProvider>,
        cache: Arc<dyn ShortsCacheRepository>,
        ttl: Duration,
    ) -> Self {
        Self {
            provider,
            cache,
            ttl,
        }
    }

    pub async fn get_popular_shorts(&self) -> Result<Vec<ShortVideo>, ApplicationError> {
        self.get_or_fetch(None).await
    }

    pub async fn get_shorts_by_category(
        &self,
        category_id: i64,
    ) -> Result<Vec<ShortVideo>, ApplicationError> {
        self.get_or_fetch(Some(category_id)).await
    }

    pub fn cache_backend(&self) -> &'static str {
        self.cache.backend()
    }

    pub fn cache_key(category_id: Option<i64>) -> String {
        match category_id {
            Some(id) => format!("{}:category:{}", CACHE_KEY_PREFIX, id),
            None => format!("{}:all", CACHE_KEY_PREFIX),
        }
    }

    async fn get_or_fetch(
        &self,
        category_id: Option<i64>,
    ) -> Result<Vec<ShortVideo>, ApplicationError> {
        let key = Self::cache_key(category_id);

        // A broken cache degrades to a miss; the provider stays the source of truth.
        match self.cache.get(&key).await {
            Ok(Some(shorts)) => {
                debug!("Shorts cache hit: key='{}', items={}", key, shorts.len());
                return Ok(shorts);
            }
            Ok(None) => debug!("Shorts cache miss: key='{}'", key),
            Err(e) => warn!("Shorts cache read failed for key '{}': {:?}", key, e),
        }

        let shorts = self.provider.search_popular_shorts(category_id).await?;
        info!(
            "Fetched {} shorts from provider for key '{}'",
            shorts.len(),
            key
        );

        if let Err(e) = self.cache.put(&key, &shorts, self.ttl).await {
            warn!("Shorts cache write failed for key '{}': {:?}", key, e);
        }

        Ok(shorts)
    }
}
