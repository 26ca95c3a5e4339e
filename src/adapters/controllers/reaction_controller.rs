use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::{
    adapters::{dto::reaction_dto::ToggleLikeResponse, identity::CallerIdentity},
    application::{error::ApplicationError, repositories::reaction_repository::ReactionRepository},
};

pub struct ReactionController;

impl ReactionController {
    /// POST /api/videos/{video_id}/reactions/like
    ///
    /// Likes the video for the caller, or removes the like if it already exists.
    /// The body reports the resulting state.
    pub async fn toggle_like(
        State(reaction_repo): State<Arc<dyn ReactionRepository>>,
        Path(video_id): Path<i64>,
        caller: CallerIdentity,
    ) -> Result<Json<ToggleLikeResponse>, ApplicationError> {
        if video_id <= 0 {
            return Err(ApplicationError::BadRequest(format!(
                "Invalid video id: {}",
                video_id
            )));
        }

        let state = reaction_repo
            .toggle_like(video_id, caller.member_id)
            .await?;
        let like_count = reaction_repo.count_likes(video_id).await?;

        info!(
            "Member {} toggled like on video {}: {:?}",
            caller.member_id, video_id, state
        );

        Ok(Json(ToggleLikeResponse {
            video_id,
            member_id: caller.member_id,
            liked: state.is_liked(),
            like_count,
        }))
    }
}
