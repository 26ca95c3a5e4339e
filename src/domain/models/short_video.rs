use serde::{Deserialize, Serialize};

pub const SHORTS_WATCH_BASE: &str = "https://www.youtube.com/shorts";

/// Summary of a short video served by the external video platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShortVideo {
    #[serde(rename = "videoId")]
    pub video_id: String,
    pub title: String,
    #[serde(rename = "channelTitle")]
    pub channel_title: String,
    #[serde(rename = "thumbnailUrl")]
    pub thumbnail_url: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    pub url: String,
}

impl ShortVideo {
    pub fn watch_url(video_id: &str) -> String {
        format!("{}/{}", SHORTS_WATCH_BASE, video_id)
    }
}
