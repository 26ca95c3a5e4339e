use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use tracing::{error, info, warn};

use crate::{
    adapters::{
        dto::{
            video_dto::{
                PageQuery, UploadVideoResponse, VideoCategoryRequest, VideoDetailsResponse,
                VideoSummaryResponse,
            },
            youtube_dto::YoutubeUrlValidationRequest,
        },
        extract::{JsonBody, QueryParams},
        state::AppState,
    },
    application::{
        dto::video_dto::VideoDTO,
        error::ApplicationError,
        repositories::video_repository::VideoRepository,
        services::youtube_url::{validate_youtube_url, YoutubeUrlValidation},
    },
    domain::models::{file::FileData, video::PageRequest},
};

const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

pub struct VideoController;

fn multipart_error(e: MultipartError) -> ApplicationError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApplicationError::PayloadTooLarge
    } else {
        warn!("Invalid multipart data: {}", e);
        ApplicationError::BadRequest("Invalid request format".to_string())
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, ApplicationError> {
    value.ok_or_else(|| {
        warn!("Missing required '{}' field in upload", field);
        ApplicationError::BadRequest(format!("Missing required field '{}'", field))
    })
}

impl VideoController {
    /// GET /api/videos?page=&size=
    /// Body: {"categoryId": 1}
    pub async fn get_videos_by_category(
        State(video_repo): State<Arc<dyn VideoRepository>>,
        QueryParams(query): QueryParams<PageQuery>,
        JsonBody(body): JsonBody<VideoCategoryRequest>,
    ) -> Result<Json<Vec<VideoSummaryResponse>>, ApplicationError> {
        let page = PageRequest::new(
            query.page.unwrap_or(PageRequest::DEFAULT_PAGE),
            query.size.unwrap_or(PageRequest::DEFAULT_SIZE),
        )
        .ok_or_else(|| {
            ApplicationError::BadRequest(format!(
                "Page size must be between 1 and {}",
                PageRequest::MAX_SIZE
            ))
        })?;

        let videos = video_repo
            .get_videos_by_category(body.category_id, page)
            .await?;

        Ok(Json(videos.into_iter().map(Into::into).collect()))
    }

    /// GET /api/videos/{video_id}
    pub async fn get_video_details(
        State(app_state): State<AppState>,
        Path(video_id): Path<i64>,
    ) -> Result<Json<VideoDetailsResponse>, ApplicationError> {
        let video = app_state.video_repository.get_video(video_id).await?;
        let like_count = app_state.reaction_repository.count_likes(video_id).await?;

        Ok(Json(VideoDetailsResponse::new(video, like_count)))
    }

    /// POST /api/videos/upload
    /// Multipart: file, title, categoryId, description (optional)
    pub async fn upload_video(
        State(app_state): State<AppState>,
        mut multipart: Multipart,
    ) -> Result<Json<UploadVideoResponse>, ApplicationError> {
        let mut file: Option<FileData> = None;
        let mut title: Option<String> = None;
        let mut category_id: Option<String> = None;
        let mut description: Option<String> = None;

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or("").to_string();

            match name.as_str() {
                "file" => {
                    let filename = field.file_name().unwrap_or("video").to_string();
                    let mime_type = field
                        .content_type()
                        .unwrap_or(DEFAULT_MIME_TYPE)
                        .to_string();
                    let bytes = field.bytes().await.map_err(multipart_error)?;
                    file = Some(FileData::new(bytes.to_vec(), filename, mime_type));
                }
                "title" => title = Some(field.text().await.map_err(multipart_error)?),
                "categoryId" => category_id = Some(field.text().await.map_err(multipart_error)?),
                "description" => description = Some(field.text().await.map_err(multipart_error)?),
                _ => {}
            }
        }

        let file = required(file, "file")?;
        let title = required(title, "title")?;
        let category_id = required(category_id, "categoryId")?;

        let category_id = category_id
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| {
                ApplicationError::BadRequest(format!("Invalid categoryId: {}", category_id))
            })?;

        if title.trim().is_empty() {
            return Err(ApplicationError::BadRequest("Title must not be blank".to_string()));
        }
        if file.content.is_empty() {
            return Err(ApplicationError::BadRequest("Uploaded file is empty".to_string()));
        }
        if !file.is_video() {
            return Err(ApplicationError::BadRequest(format!(
                "MIME type '{}' not allowed",
                file.mime_type
            )));
        }

        let stored = app_state.storage_service.upload(file).await?;

        let video_dto = VideoDTO {
            category_id: Some(category_id),
            title: Some(title),
            description,
            object_key: Some(stored.object_key.clone()),
            mime_type: Some(stored.mime_type),
            size: Some(stored.size),
            uploaded_at: Some(Utc::now()),
            ..Default::default()
        };

        let video = match app_state.video_repository.create_video(video_dto).await {
            Ok(video) => video,
            Err(e) => {
                // Roll back the orphaned object; the record error is what the caller sees.
                if let Err(cleanup) = app_state.storage_service.delete(&stored.object_key).await {
                    error!(
                        "Failed to remove orphaned object {}: {:?}",
                        stored.object_key, cleanup
                    );
                }
                return Err(e);
            }
        };

        info!(
            "Uploaded video {} ({} bytes) as {}",
            video.id, video.size, video.object_key
        );

        Ok(Json(UploadVideoResponse::from(video)))
    }

    /// GET /api/videos/{video_id}/extract
    pub async fn download_video(
        State(app_state): State<AppState>,
        Path(video_id): Path<i64>,
    ) -> Result<Json<String>, ApplicationError> {
        let video = app_state.video_repository.get_video(video_id).await?;
        let url = app_state
            .storage_service
            .download_url(&video.object_key)
            .await?;

        Ok(Json(url.to_string()))
    }

    /// POST /api/videos/youtube-url-validation
    pub async fn validate_youtube_url(
        JsonBody(body): JsonBody<YoutubeUrlValidationRequest>,
    ) -> Json<YoutubeUrlValidation> {
        Json(validate_youtube_url(&body.url))
    }
}
