mod adapters;
mod application;
mod domain;
mod services;
#[cfg(test)]
mod testing;

use std::sync::Arc;

use adapters::{
    repositories::{
        MemoryShortsCacheRepository, PgReactionRepository, PgVideoRepository,
        RedisShortsCacheRepository,
    },
    router::build_router,
    state::AppState,
};
use application::{
    repositories::{
        reaction_repository::ReactionRepository, shorts_cache_repository::ShortsCacheRepository,
        video_repository::VideoRepository,
    },
    services::{ShortsService, StorageService},
};
use domain::config::settings::Settings;
use services::{S3StorageService, YoutubeApiClient};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // aws-sdk-s3 and redis both pick up the process-wide rustls provider.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let settings = Settings::from_env().expect("ERROR: Invalid configuration");

    tracing::info!("Starting talkak-service on port {}", settings.port);

    let cors = match &settings.cors_allowed_origins {
        Some(allowed_origins) => {
            let origins: Vec<_> = allowed_origins
                .iter()
                .map(|s| s.parse().expect("Invalid CORS origin"))
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        // Development only
        None => CorsLayer::permissive(),
    };

    tracing::info!("Connecting to databases...");
    let (pool, redis_conn_manager) = tokio::join!(
        async {
            sqlx::postgres::PgPoolOptions::new()
                .max_connections(5)
                .acquire_timeout(std::time::Duration::from_secs(30))
                .connect(&settings.database_url)
                .await
                .expect("ERROR: Failed to connect to PostgreSQL database. Check DATABASE_URL and network connectivity.")
        },
        async {
            match &settings.redis_url {
                Some(redis_url) => {
                    let redis_client = redis::Client::open(redis_url.as_str())
                        .expect("ERROR: Failed to create Redis client. Check REDIS_URL format.");
                    Some(redis::aio::ConnectionManager::new(redis_client).await.expect(
                        "ERROR: Failed to connect to Redis. Check REDIS_URL and network connectivity.",
                    ))
                }
                None => None,
            }
        }
    );
    tracing::info!("Database connections established");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("ERROR: Failed to run database migrations");

    let shorts_cache: Arc<dyn ShortsCacheRepository> = match redis_conn_manager {
        Some(conn) => Arc::new(RedisShortsCacheRepository::new(conn)),
        None => {
            tracing::warn!("REDIS_URL not set, caching shorts in process memory");
            Arc::new(MemoryShortsCacheRepository::new())
        }
    };

    let storage_service = Arc::new(
        S3StorageService::new(&settings.s3).expect("ERROR: Failed to create storage service"),
    ) as Arc<dyn StorageService>;

    let youtube_client = Arc::new(
        YoutubeApiClient::new(&settings.youtube).expect("ERROR: Failed to create YouTube client"),
    );

    let app_state = AppState {
        video_repository: Arc::new(PgVideoRepository::new(pool.clone()))
            as Arc<dyn VideoRepository>,
        reaction_repository: Arc::new(PgReactionRepository::new(pool))
            as Arc<dyn ReactionRepository>,
        storage_service,
        shorts_service: Arc::new(ShortsService::new(
            youtube_client,
            shorts_cache,
            settings.shorts_cache_ttl,
        )),
    };

    let router = build_router(app_state, settings.max_upload_bytes)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", settings.port))
        .await
        .expect("Failed to bind to port");

    tracing::info!("Server listening on 0.0.0.0:{}", settings.port);

    axum::serve(listener, router)
        .await
        .expect("Failed to start server");
}
