use async_trait::async_trait;
use reqwest::Url;

use crate::{
    application::error::ApplicationError,
    domain::models::file::{FileData, StoredObject},
};

#[async_trait]
pub trait StorageService: Send + Sync {
    async fn upload(&self, file_data: FileData) -> Result<StoredObject, ApplicationError>;
    async fn delete(&self, object_key: &str) -> Result<(), ApplicationError>;
    /// Time-limited link to the stored object.
    async fn download_url(&self, object_key: &str) -> Result<Url, ApplicationError>;
}
