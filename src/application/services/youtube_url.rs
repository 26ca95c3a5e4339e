use reqwest::Url;
use serde::Serialize;

const VIDEO_ID_LEN: usize = 11;
const WATCH_HOSTS: [&str; 3] = ["youtube.com", "www.youtube.com", "m.youtube.com"];
const SHORT_LINK_HOST: &str = "youtu.be";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YoutubeUrlValidation {
    pub valid: bool,
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

/// Checks whether `raw` points at a single YouTube video and extracts its id.
///
/// Accepts watch, shorts and embed links on the main hosts and `youtu.be`
/// short links. Never fails: anything unrecognised is reported as invalid.
pub fn validate_youtube_url(raw: &str) -> YoutubeUrlValidation {
    let video_id = extract_video_id(raw.trim());
    YoutubeUrlValidation {
        valid: video_id.is_some(),
        video_id,
    }
}

fn extract_video_id(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return None;
    }

    let host = url.host_str()?.to_ascii_lowercase();
    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    let candidate = if host == SHORT_LINK_HOST {
        match segments.as_slice() {
            [id] => Some(id.to_string()),
            _ => None,
        }
    } else if WATCH_HOSTS.contains(&host.as_str()) {
        match segments.as_slice() {
            ["watch"] => url
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned()),
            ["shorts", id] | ["embed", id] => Some(id.to_string()),
            _ => None,
        }
    } else {
        None
    };

    candidate.filter(|id| is_video_id(id))
}

fn is_video_id(id: &str) -> bool {
    id.len() == VIDEO_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
