use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::adapters::{
    controllers::{
        health_controller::HealthController, reaction_controller::ReactionController,
        video_controller::VideoController, youtube_controller::YoutubeController,
    },
    state::AppState,
};

pub fn build_router(app_state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/api/health", get(HealthController::health_check))
        .route("/api/videos", get(VideoController::get_videos_by_category))
        .route(
            "/api/videos/upload",
            post(VideoController::upload_video).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route(
            "/api/videos/youtube-url-validation",
            post(VideoController::validate_youtube_url),
        )
        .route("/api/videos/youtube", get(YoutubeController::get_popular_shorts))
        .route(
            "/api/videos/youtube/{category_id}",
            get(YoutubeController::get_shorts_by_category),
        )
        .route("/api/videos/{video_id}", get(VideoController::get_video_details))
        .route(
            "/api/videos/{video_id}/extract",
            get(VideoController::download_video),
        )
        .route(
            "/api/videos/{video_id}/reactions/like",
            post(ReactionController::toggle_like),
        )
        .with_state(app_state)
}
