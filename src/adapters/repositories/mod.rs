mod memory_shorts_cache_repository;
mod pg_reaction_repository;
mod pg_video_repository;
mod redis_shorts_cache_repository;

pub use memory_shorts_cache_repository::MemoryShortsCacheRepository;
pub use pg_reaction_repository::PgReactionRepository;
pub use pg_video_repository::PgVideoRepository;
pub use redis_shorts_cache_repository::RedisShortsCacheRepository;
