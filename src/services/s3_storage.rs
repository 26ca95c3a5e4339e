use std::{fmt::Debug, time::Duration};

use async_trait::async_trait;
use aws_sdk_s3::{
    config::{BehaviorVersion, Credentials, Region},
    error::{DisplayErrorContext, SdkError},
    presigning::PresigningConfig,
    primitives::ByteStream,
    Client,
};
use reqwest::Url;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    application::{error::ApplicationError, services::StorageService},
    domain::{
        config::settings::S3Settings,
        models::file::{FileData, StoredObject},
    },
    services::error::StorageError,
};

const OBJECT_KEY_PREFIX: &str = "videos";

pub struct S3StorageService {
    client: Client,
    bucket_name: String,
    download_url_ttl: Duration,
}

impl S3StorageService {
    pub fn new(settings: &S3Settings) -> Result<Self, StorageError> {
        if settings.access_key_id.is_empty() || settings.secret_access_key.is_empty() {
            return Err(StorageError::InvalidCredentials(
                "S3 access key and secret are required".to_string(),
            ));
        }

        let credentials = Credentials::new(
            settings.access_key_id.clone(),
            settings.secret_access_key.clone(),
            None,
            None,
            "talkak-static",
        );

        let mut builder = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()))
            .credentials_provider(credentials);

        // Custom endpoints (MinIO, R2, Supabase) only speak path-style addressing.
        if let Some(endpoint) = &settings.endpoint {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Ok(Self {
            client: Client::from_conf(builder.build()),
            bucket_name: settings.bucket_name.clone(),
            download_url_ttl: settings.download_url_ttl,
        })
    }

    fn generate_object_key(filename: &str) -> String {
        let safe_filename = filename
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '.' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect::<String>();

        let safe_filename = if safe_filename.trim_matches(|c| c == '.' || c == '_').is_empty() {
            "video".to_string()
        } else {
            safe_filename
        };

        format!("{}/{}/{}", OBJECT_KEY_PREFIX, Uuid::new_v4(), safe_filename)
    }
}

fn classify<E, R>(error: SdkError<E, R>) -> StorageError
where
    E: std::error::Error + 'static,
    R: Debug,
{
    let message = DisplayErrorContext(&error).to_string();
    match error {
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => {
            StorageError::NetworkError(message)
        }
        _ => StorageError::ProviderError(message),
    }
}

#[async_trait]
impl StorageService for S3StorageService {
    async fn upload(&self, file_data: FileData) -> Result<StoredObject, ApplicationError> {
        let object_key = Self::generate_object_key(&file_data.filename);
        let size = file_data.size();
        let mime_type = file_data.mime_type.clone();

        debug!(
            "Uploading {} bytes to s3://{}/{}",
            size, self.bucket_name, object_key
        );

        self.client
            .put_object()
            .bucket(&self.bucket_name)
            .key(&object_key)
            .content_type(&mime_type)
            .content_length(size as i64)
            .body(ByteStream::from(file_data.content))
            .send()
            .await
            .map_err(classify)?;

        info!("Stored object {} ({} bytes)", object_key, size);

        Ok(StoredObject {
            object_key,
            size,
            mime_type,
        })
    }

    async fn delete(&self, object_key: &str) -> Result<(), ApplicationError> {
        self.client
            .delete_object()
            .bucket(&self.bucket_name)
            .key(object_key)
            .send()
            .await
            .map_err(classify)?;

        info!("Deleted object {}", object_key);
        Ok(())
    }

    async fn download_url(&self, object_key: &str) -> Result<Url, ApplicationError> {
        let presigning = PresigningConfig::expires_in(self.download_url_ttl)
            .map_err(|e| StorageError::Presign(e.to_string()))?;

        let request = self
            .client
            .get_object()
            .bucket(&self.bucket_name)
            .key(object_key)
            .presigned(presigning)
            .await
            .map_err(|e| StorageError::Presign(DisplayErrorContext(&e).to_string()))?;

        let url = Url::parse(request.uri()).map_err(|e| StorageError::Presign(e.to_string()))?;
        Ok(url)
    }
}
