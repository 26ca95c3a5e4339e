use axum::extract::FromRef;
use std::sync::Arc;

use crate::application::{
    repositories::{reaction_repository::ReactionRepository, video_repository::VideoRepository},
    services::{ShortsService, StorageService},
};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub video_repository: Arc<dyn VideoRepository>,
    pub reaction_repository: Arc<dyn ReactionRepository>,
    pub storage_service: Arc<dyn StorageService>,
    pub shorts_service: Arc<ShortsService>,
}
