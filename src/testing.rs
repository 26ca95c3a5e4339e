//! In-memory stand-ins for the repositories and external services.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Url;

use crate::{
    adapters::{repositories::MemoryShortsCacheRepository, state::AppState},
    application::{
        dto::video_dto::VideoDTO,
        error::ApplicationError,
        repositories::{
            reaction_repository::ReactionRepository,
            shorts_cache_repository::ShortsCacheRepository, video_repository::VideoRepository,
        },
        services::{ShortsProvider, ShortsService, StorageService},
    },
    domain::models::{
        file::{FileData, StoredObject},
        reaction::ReactionState,
        short_video::ShortVideo,
        video::{PageRequest, Video},
    },
};

pub struct InMemoryVideoRepository {
    videos: Mutex<Vec<Video>>,
    next_id: AtomicI64,
    pub fail_create: AtomicBool,
}

impl Default for InMemoryVideoRepository {
    fn default() -> Self {
        Self {
            videos: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            fail_create: AtomicBool::new(false),
        }
    }
}

impl InMemoryVideoRepository {
    pub fn len(&self) -> usize {
        self.videos.lock().unwrap().len()
    }

    pub fn exists(&self, video_id: i64) -> bool {
        self.videos.lock().unwrap().iter().any(|v| v.id == video_id)
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn create_video(&self, video: VideoDTO) -> Result<Video, ApplicationError> {
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(ApplicationError::DatabaseError("insert failed".to_string()));
        }

        let mut video = video;
        video.sanitize();
        video.id = self.next_id.fetch_add(1, Ordering::SeqCst);

        let video: Video = video.into();
        self.videos.lock().unwrap().push(video.clone());
        Ok(video)
    }

    async fn get_video(&self, video_id: i64) -> Result<Video, ApplicationError> {
        self.videos
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.id == video_id)
            .cloned()
            .ok_or(ApplicationError::NotFound)
    }

    async fn get_videos_by_category(
        &self,
        category_id: i64,
        page: PageRequest,
    ) -> Result<Vec<Video>, ApplicationError> {
        let mut videos: Vec<Video> = self
            .videos
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.category_id == category_id)
            .cloned()
            .collect();
        videos.sort_by_key(|v| v.id);

        Ok(videos
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }
}

pub struct InMemoryReactionRepository {
    rows: Mutex<Vec<(i64, i64)>>,
    videos: Arc<InMemoryVideoRepository>,
}

impl InMemoryReactionRepository {
    pub fn new(videos: Arc<InMemoryVideoRepository>) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            videos,
        }
    }

    pub fn count(&self, video_id: i64, member_id: i64) -> usize {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| **row == (video_id, member_id))
            .count()
    }

    pub fn total(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl ReactionRepository for InMemoryReactionRepository {
    async fn toggle_like(
        &self,
        video_id: i64,
        member_id: i64,
    ) -> Result<ReactionState, ApplicationError> {
        if !self.videos.exists(video_id) {
            return Err(ApplicationError::NotFound);
        }

        let mut rows = self.rows.lock().unwrap();
        match rows.iter().position(|row| *row == (video_id, member_id)) {
            Some(index) => {
                rows.remove(index);
                Ok(ReactionState::Unliked)
            }
            None => {
                rows.push((video_id, member_id));
                Ok(ReactionState::Liked)
            }
        }
    }

    async fn count_likes(&self, video_id: i64) -> Result<u64, ApplicationError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(v, _)| *v == video_id)
            .count() as u64)
    }
}

#[derive(Default)]
pub struct FakeStorage {
    objects: Mutex<HashMap<String, StoredObject>>,
    uploads: AtomicUsize,
    deleted: AtomicUsize,
    pub fail_upload: AtomicBool,
}

impl FakeStorage {
    pub fn contains(&self, object_key: &str) -> bool {
        self.objects.lock().unwrap().contains_key(object_key)
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn deleted_count(&self) -> usize {
        self.deleted.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StorageService for FakeStorage {
    async fn upload(&self, file_data: FileData) -> Result<StoredObject, ApplicationError> {
        if self.fail_upload.load(Ordering::SeqCst) {
            return Err(ApplicationError::ExternalService(
                "storage unavailable".to_string(),
            ));
        }

        let n = self.uploads.fetch_add(1, Ordering::SeqCst);
        let stored = StoredObject {
            object_key: format!("videos/{}/{}", n, file_data.filename),
            size: file_data.size(),
            mime_type: file_data.mime_type,
        };
        self.objects
            .lock()
            .unwrap()
            .insert(stored.object_key.clone(), stored.clone());
        Ok(stored)
    }

    async fn delete(&self, object_key: &str) -> Result<(), ApplicationError> {
        self.objects.lock().unwrap().remove(object_key);
        self.deleted.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn download_url(&self, object_key: &str) -> Result<Url, ApplicationError> {
        Url::parse(&format!("http://storage.test/bucket/{}", object_key))
            .map_err(|e| ApplicationError::MalformedUrl(e.to_string()))
    }
}

#[derive(Default)]
pub struct CountingShortsProvider {
    calls: AtomicUsize,
    categories: Mutex<Vec<Option<i64>>>,
    pub fail: AtomicBool,
}

impl CountingShortsProvider {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn categories(&self) -> Vec<Option<i64>> {
        self.categories.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShortsProvider for CountingShortsProvider {
    async fn search_popular_shorts(
        &self,
        category_id: Option<i64>,
    ) -> Result<Vec<ShortVideo>, ApplicationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.categories.lock().unwrap().push(category_id);

        if self.fail.load(Ordering::SeqCst) {
            return Err(ApplicationError::ExternalService(
                "quota exceeded".to_string(),
            ));
        }

        let prefix = match category_id {
            Some(id) => format!("cat{}", id),
            None => "all".to_string(),
        };

        Ok((0..3)
            .map(|i| {
                let video_id = format!("{}-{}", prefix, i);
                ShortVideo {
                    url: ShortVideo::watch_url(&video_id),
                    title: format!("{} short {}", prefix, i),
                    channel_title: "channel".to_string(),
                    thumbnail_url: None,
                    published_at: Some(Utc::now().to_rfc3339()),
                    video_id,
                }
            })
            .collect())
    }
}

pub struct FailingShortsCache;

#[async_trait]
impl ShortsCacheRepository for FailingShortsCache {
    async fn get(&self, _key: &str) -> Result<Option<Vec<ShortVideo>>, ApplicationError> {
        Err(ApplicationError::InternalError("cache down".to_string()))
    }

    async fn put(
        &self,
        _key: &str,
        _shorts: &[ShortVideo],
        _ttl: Duration,
    ) -> Result<(), ApplicationError> {
        Err(ApplicationError::InternalError("cache down".to_string()))
    }

    fn backend(&self) -> &'static str {
        "failing"
    }
}

/// Wires the fakes into an [`AppState`] and keeps handles for assertions.
pub struct TestContext {
    pub videos: Arc<InMemoryVideoRepository>,
    pub reactions: Arc<InMemoryReactionRepository>,
    pub storage: Arc<FakeStorage>,
    pub shorts: Arc<CountingShortsProvider>,
    shorts_service: Arc<ShortsService>,
}

impl Default for TestContext {
    fn default() -> Self {
        let videos = Arc::new(InMemoryVideoRepository::default());
        let shorts = Arc::new(CountingShortsProvider::default());
        let shorts_service = Arc::new(ShortsService::new(
            shorts.clone(),
            Arc::new(MemoryShortsCacheRepository::new()),
            Duration::from_secs(300),
        ));

        Self {
            reactions: Arc::new(InMemoryReactionRepository::new(videos.clone())),
            videos,
            storage: Arc::new(FakeStorage::default()),
            shorts,
            shorts_service,
        }
    }
}

impl TestContext {
    pub fn state(&self) -> AppState {
        AppState {
            video_repository: self.videos.clone(),
            reaction_repository: self.reactions.clone(),
            storage_service: self.storage.clone(),
            shorts_service: self.shorts_service.clone(),
        }
    }

    pub fn seed_video(&self, category_id: i64, title: &str) -> i64 {
        let id = self.videos.next_id.fetch_add(1, Ordering::SeqCst);
        self.videos.videos.lock().unwrap().push(Video {
            id,
            category_id,
            title: title.to_string(),
            description: None,
            object_key: format!("videos/seed/{}.mp4", id),
            mime_type: "video/mp4".to_string(),
            size: 1024,
            uploaded_at: Utc::now(),
        });
        id
    }
}

/// Connects to `DATABASE_URL` and applies the migrations.
///
/// Returns `None` when no database is configured so the Postgres tests skip
/// instead of failing on machines without one.
pub async fn pg_pool() -> Option<sqlx::PgPool> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping Postgres test");
        return None;
    };
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    Some(pool)
}

/// A category id no other test run will have written to.
pub fn fresh_category_id() -> i64 {
    (uuid::Uuid::new_v4().as_u128() >> 65) as i64
}

pub fn new_video(category_id: i64, title: &str) -> VideoDTO {
    VideoDTO {
        category_id: Some(category_id),
        title: Some(title.to_string()),
        object_key: Some(format!("videos/{}/{}.mp4", uuid::Uuid::new_v4(), title)),
        mime_type: Some("video/mp4".to_string()),
        size: Some(1024),
        uploaded_at: Some(Utc::now()),
        ..Default::default()
    }
}
