use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::video::Video;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VideoDTO {
    #[serde(default)]
    pub id: i64,
    pub category_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub object_key: Option<String>,
    pub mime_type: Option<String>,
    pub size: Option<u64>,
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl VideoDTO {
    pub fn sanitize(&mut self) {
        if let Some(size) = self.size {
            self.size = Some(std::cmp::min(size, i64::MAX as u64));
        }
        if let Some(ref title) = self.title {
            self.title = Some(title.trim().to_string());
        }
        if let Some(ref description) = self.description {
            let trimmed = description.trim();
            self.description = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            };
        }
    }
}

impl From<VideoDTO> for Video {
    fn from(value: VideoDTO) -> Self {
        Video {
            id: value.id,
            category_id: value.category_id.unwrap_or(0),
            title: value.title.unwrap_or_default(),
            description: value.description,
            object_key: value.object_key.unwrap_or_default(),
            mime_type: value.mime_type.unwrap_or_default(),
            size: value.size.unwrap_or(0),
            uploaded_at: value.uploaded_at.unwrap_or_else(Utc::now),
        }
    }
}
