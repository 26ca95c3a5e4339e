use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    application::{error::ApplicationError, services::ShortsProvider},
    domain::{config::settings::YoutubeSettings, models::short_video::ShortVideo},
    services::error::YoutubeError,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const SHORTS_QUERY: &str = "shorts";

#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    id: ResourceId,
    snippet: Option<Snippet>,
}

#[derive(Debug, Deserialize)]
struct ResourceId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(rename = "channelTitle", default)]
    channel_title: String,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Deserialize)]
struct Thumbnails {
    high: Option<Thumbnail>,
    medium: Option<Thumbnail>,
    default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl SearchResult {
    /// Channels and playlists carry no video id and are dropped.
    fn into_short_video(self) -> Option<ShortVideo> {
        let video_id = self.id.video_id?;
        let snippet = self.snippet;

        let thumbnail_url = snippet
            .as_ref()
            .and_then(|s| s.thumbnails.as_ref())
            .and_then(|t| t.high.as_ref().or(t.medium.as_ref()).or(t.default.as_ref()))
            .map(|t| t.url.clone());

        let (title, channel_title, published_at) = match snippet {
            Some(s) => (s.title, s.channel_title, s.published_at),
            None => (String::new(), String::new(), None),
        };

        Some(ShortVideo {
            url: ShortVideo::watch_url(&video_id),
            video_id,
            title,
            channel_title,
            thumbnail_url,
            published_at,
        })
    }
}

/// YouTube Data API v3 client restricted to short-video searches.
pub struct YoutubeApiClient {
    client: Client,
    base_url: String,
    api_key: String,
    region_code: String,
    max_results: u8,
}

impl YoutubeApiClient {
    pub fn new(settings: &YoutubeSettings) -> Result<Self, YoutubeError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(YoutubeError::from)?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            region_code: settings.region_code.clone(),
            max_results: settings.max_results,
        })
    }

    fn search_params(&self, category_id: Option<i64>) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("part", "snippet".to_string()),
            ("type", "video".to_string()),
            ("videoDuration", "short".to_string()),
            ("order", "viewCount".to_string()),
            ("q", SHORTS_QUERY.to_string()),
            ("regionCode", self.region_code.clone()),
            ("maxResults", self.max_results.to_string()),
            ("key", self.api_key.clone()),
        ];
        if let Some(category_id) = category_id {
            params.push(("videoCategoryId", category_id.to_string()));
        }
        params
    }

    fn parse_search_response(body: &str) -> Result<Vec<ShortVideo>, YoutubeError> {
        let response: SearchListResponse = serde_json::from_str(body)
            .map_err(|e| YoutubeError::InvalidResponse(e.to_string()))?;

        Ok(response
            .items
            .into_iter()
            .filter_map(SearchResult::into_short_video)
            .collect())
    }
}

#[async_trait]
impl ShortsProvider for YoutubeApiClient {
    async fn search_popular_shorts(
        &self,
        category_id: Option<i64>,
    ) -> Result<Vec<ShortVideo>, ApplicationError> {
        let url = format!("{}/search", self.base_url);
        debug!("Searching YouTube shorts, category={:?}", category_id);

        let response = self
            .client
            .get(&url)
            .query(&self.search_params(category_id))
            .send()
            .await
            .map_err(YoutubeError::from)?;

        let status = response.status();
        let body = response.text().await.map_err(YoutubeError::from)?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or(body);
            warn!("YouTube search failed with status {}: {}", status, message);
            return Err(YoutubeError::ApiError {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        Ok(Self::parse_search_response(&body)?)
    }
}
