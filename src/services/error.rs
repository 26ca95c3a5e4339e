use thiserror::Error;

use crate::application::error::ApplicationError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Storage provider error: {0}")]
    ProviderError(String),

    #[error("Presigning failed: {0}")]
    Presign(String),
}

impl From<StorageError> for ApplicationError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::Presign(msg) => ApplicationError::MalformedUrl(msg),
            StorageError::NetworkError(msg)
            | StorageError::InvalidCredentials(msg)
            | StorageError::ProviderError(msg) => {
                ApplicationError::ExternalService(format!("Storage error: {}", msg))
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum YoutubeError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("YouTube API rejected the request ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Unexpected YouTube API response: {0}")]
    InvalidResponse(String),
}

impl From<YoutubeError> for ApplicationError {
    fn from(error: YoutubeError) -> Self {
        ApplicationError::ExternalService(format!("YouTube error: {}", error))
    }
}

impl From<reqwest::Error> for YoutubeError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            YoutubeError::NetworkError("Request timeout".to_string())
        } else if error.is_connect() {
            YoutubeError::NetworkError(format!("Connection failed: {}", error))
        } else if let Some(status) = error.status() {
            YoutubeError::ApiError {
                status: status.as_u16(),
                message: error.to_string(),
            }
        } else if error.is_decode() {
            YoutubeError::InvalidResponse(error.to_string())
        } else {
            YoutubeError::NetworkError(error.to_string())
        }
    }
}
