use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ToggleLikeResponse {
    #[serde(rename = "videoId")]
    pub video_id: i64,
    #[serde(rename = "memberId")]
    pub member_id: i64,
    pub liked: bool,
    #[serde(rename = "likeCount")]
    pub like_count: u64,
}
