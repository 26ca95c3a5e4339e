use async_trait::async_trait;
use sqlx::query_as;

use crate::{
    application::{
        dto::video_dto::VideoDTO, error::ApplicationError,
        repositories::video_repository::VideoRepository,
    },
    domain::models::video::{PageRequest, Video},
};

pub struct PgVideoRepository {
    pool: sqlx::PgPool,
}

impl PgVideoRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoRepository for PgVideoRepository {
    async fn create_video(&self, video: VideoDTO) -> Result<Video, ApplicationError> {
        let mut video = video;
        video.sanitize();

        let query = r#"
            INSERT INTO application.videos (
                category_id, title, description, object_key,
                mime_type, size, uploaded_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
        "#;

        let new_video: Video = video.into();

        let created: VideoDTO = query_as::<_, VideoDTO>(query)
            .bind(new_video.category_id)
            .bind(&new_video.title)
            .bind(&new_video.description)
            .bind(&new_video.object_key)
            .bind(&new_video.mime_type)
            .bind(new_video.size as i64)
            .bind(new_video.uploaded_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?;

        Ok(created.into())
    }

    async fn get_video(&self, video_id: i64) -> Result<Video, ApplicationError> {
        let query = "SELECT * FROM application.videos WHERE id = $1";

        let fetched: Option<VideoDTO> = query_as::<_, VideoDTO>(query)
            .bind(video_id)
            .fetch_optional(&self.pool)
            .await?;

        fetched.map(Into::into).ok_or(ApplicationError::NotFound)
    }

    async fn get_videos_by_category(
        &self,
        category_id: i64,
        page: PageRequest,
    ) -> Result<Vec<Video>, ApplicationError> {
        let query = r#"
            SELECT * FROM application.videos
            WHERE category_id = $1
            ORDER BY id ASC
            LIMIT $2 OFFSET $3
        "#;

        let offset = i64::try_from(page.offset())
            .map_err(|_| ApplicationError::BadRequest("Page offset out of range".to_string()))?;

        let rows: Vec<VideoDTO> = query_as::<_, VideoDTO>(query)
            .bind(category_id)
            .bind(page.limit() as i64)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|dto| dto.into()).collect())
    }
}
