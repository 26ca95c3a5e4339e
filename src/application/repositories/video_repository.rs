use async_trait::async_trait;

use crate::{
    application::{dto::video_dto::VideoDTO, error::ApplicationError},
    domain::models::video::{PageRequest, Video},
};

#[async_trait]
pub trait VideoRepository: Send + Sync {
    async fn create_video(&self, video: VideoDTO) -> Result<Video, ApplicationError>;
    /// Fails with `NotFound` when no video has this id.
    async fn get_video(&self, video_id: i64) -> Result<Video, ApplicationError>;
    /// Videos of one category in ascending id order. Pages past the end are empty.
    async fn get_videos_by_category(
        &self,
        category_id: i64,
        page: PageRequest,
    ) -> Result<Vec<Video>, ApplicationError>;
}
