pub mod shorts_service;
pub mod storage_service;
pub mod youtube_url;

pub use shorts_service::{ShortsProvider, ShortsService};
pub use storage_service::StorageService;
