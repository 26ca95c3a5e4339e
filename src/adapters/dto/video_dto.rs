use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, FromRow, Row};

use crate::{application::dto::video_dto::VideoDTO, domain::models::video::Video};

impl FromRow<'_, PgRow> for VideoDTO {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        let size: i64 = row.try_get("size")?;

        Ok(VideoDTO {
            id: row.try_get("id")?,
            category_id: Some(row.try_get("category_id")?),
            title: Some(row.try_get("title")?),
            description: row.try_get("description")?,
            object_key: Some(row.try_get("object_key")?),
            mime_type: Some(row.try_get("mime_type")?),
            size: Some(size.max(0) as u64),
            uploaded_at: Some(row.try_get("uploaded_at")?),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct VideoCategoryRequest {
    #[serde(rename = "categoryId")]
    pub category_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct VideoSummaryResponse {
    #[serde(rename = "videoId")]
    pub video_id: i64,
    pub title: String,
    #[serde(rename = "categoryId")]
    pub category_id: i64,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: DateTime<Utc>,
}

impl From<Video> for VideoSummaryResponse {
    fn from(video: Video) -> Self {
        Self {
            video_id: video.id,
            title: video.title,
            category_id: video.category_id,
            uploaded_at: video.uploaded_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct VideoDetailsResponse {
    #[serde(rename = "videoId")]
    pub video_id: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "categoryId")]
    pub category_id: i64,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub size: u64,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: DateTime<Utc>,
    #[serde(rename = "likeCount")]
    pub like_count: u64,
}

impl VideoDetailsResponse {
    pub fn new(video: Video, like_count: u64) -> Self {
        Self {
            video_id: video.id,
            title: video.title,
            description: video.description,
            category_id: video.category_id,
            mime_type: video.mime_type,
            size: video.size,
            uploaded_at: video.uploaded_at,
            like_count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct UploadVideoResponse {
    #[serde(rename = "videoId")]
    pub video_id: i64,
    pub title: String,
    #[serde(rename = "categoryId")]
    pub category_id: i64,
    #[serde(rename = "objectKey")]
    pub object_key: String,
    pub size: u64,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: DateTime<Utc>,
}

impl From<Video> for UploadVideoResponse {
    fn from(video: Video) -> Self {
        Self {
            video_id: video.id,
            title: video.title,
            category_id: video.category_id,
            object_key: video.object_key,
            size: video.size,
            uploaded_at: video.uploaded_at,
        }
    }
}
