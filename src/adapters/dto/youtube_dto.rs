use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct YoutubeUrlValidationRequest {
    pub url: String,
}
