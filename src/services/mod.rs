mod error;
mod s3_storage;
mod youtube_client;

pub use error::{StorageError, YoutubeError};
pub use s3_storage::S3StorageService;
pub use youtube_client::YoutubeApiClient;
