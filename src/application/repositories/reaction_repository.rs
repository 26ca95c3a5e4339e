use async_trait::async_trait;

use crate::{application::error::ApplicationError, domain::models::reaction::ReactionState};

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Removes the member's like if present, otherwise records it, as one atomic step.
    ///
    /// Implementations must keep at most one reaction per `(video_id, member_id)`
    /// even when called concurrently for the same pair. Fails with `NotFound`
    /// when the video does not exist.
    async fn toggle_like(
        &self,
        video_id: i64,
        member_id: i64,
    ) -> Result<ReactionState, ApplicationError>;

    async fn count_likes(&self, video_id: i64) -> Result<u64, ApplicationError>;
}
