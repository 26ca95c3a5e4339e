pub mod reaction_repository;
pub mod shorts_cache_repository;
pub mod video_repository;
