use std::{sync::Arc, time::Instant};

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::{
    application::{error::ApplicationError, services::ShortsService},
    domain::models::short_video::ShortVideo,
};

pub struct YoutubeController;

impl YoutubeController {
    /// GET /api/videos/youtube
    pub async fn get_popular_shorts(
        State(shorts_service): State<Arc<ShortsService>>,
    ) -> Result<Json<Vec<ShortVideo>>, ApplicationError> {
        let start = Instant::now();
        let shorts = shorts_service.get_popular_shorts().await?;
        info!(
            "Popular shorts served in {} ms",
            start.elapsed().as_millis()
        );

        Ok(Json(shorts))
    }

    /// GET /api/videos/youtube/{category_id}
    pub async fn get_shorts_by_category(
        State(shorts_service): State<Arc<ShortsService>>,
        Path(category_id): Path<i64>,
    ) -> Result<Json<Vec<ShortVideo>>, ApplicationError> {
        if category_id <= 0 {
            return Err(ApplicationError::BadRequest(format!(
                "Invalid category id: {}",
                category_id
            )));
        }

        let start = Instant::now();
        let shorts = shorts_service.get_shorts_by_category(category_id).await?;
        info!(
            "Shorts for category {} served in {} ms",
            category_id,
            start.elapsed().as_millis()
        );

        Ok(Json(shorts))
    }
}
