use std::time::Duration;

use async_trait::async_trait;

use crate::{application::error::ApplicationError, domain::models::short_video::ShortVideo};

#[async_trait]
pub trait ShortsCacheRepository: Send + Sync {
    /// `Ok(None)` on a miss or an expired entry.
    async fn get(&self, key: &str) -> Result<Option<Vec<ShortVideo>>, ApplicationError>;
    async fn put(
        &self,
        key: &str,
        shorts: &[ShortVideo],
        ttl: Duration,
    ) -> Result<(), ApplicationError>;

    /// Short name of the backend, reported by the health endpoint.
    fn backend(&self) -> &'static str;
}
