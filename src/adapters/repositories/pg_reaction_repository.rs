use async_trait::async_trait;
use tracing::debug;

use crate::{
    application::{error::ApplicationError, repositories::reaction_repository::ReactionRepository},
    domain::models::reaction::ReactionState,
};

pub struct PgReactionRepository {
    pool: sqlx::PgPool,
}

impl PgReactionRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    async fn toggle_like(
        &self,
        video_id: i64,
        member_id: i64,
    ) -> Result<ReactionState, ApplicationError> {
        // One statement: delete the like if it exists, otherwise insert it. The
        // primary key on (video_id, member_id) turns a racing insert into a no-op,
        // so the pair never holds more than one row.
        let query = r#"
            WITH removed AS (
                DELETE FROM application.reactions
                WHERE video_id = $1 AND member_id = $2
                RETURNING 1
            ),
            added AS (
                INSERT INTO application.reactions (video_id, member_id, created_at)
                SELECT $1, $2, NOW()
                WHERE NOT EXISTS (SELECT 1 FROM removed)
                ON CONFLICT (video_id, member_id) DO NOTHING
                RETURNING 1
            )
            SELECT NOT EXISTS (SELECT 1 FROM removed) AS liked
        "#;

        let liked: bool = sqlx::query_scalar(query)
            .bind(video_id)
            .bind(member_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e.as_database_error() {
                Some(db) if db.is_foreign_key_violation() => ApplicationError::NotFound,
                _ => ApplicationError::DatabaseError(e.to_string()),
            })?;

        debug!(
            "Toggled like: video_id={}, member_id={}, liked={}",
            video_id, member_id, liked
        );

        Ok(ReactionState::from(liked))
    }

    async fn count_likes(&self, video_id: i64) -> Result<u64, ApplicationError> {
        let query = "SELECT COUNT(*) FROM application.reactions WHERE video_id = $1";

        let count: i64 = sqlx::query_scalar(query)
            .bind(video_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        adapters::repositories::PgVideoRepository,
        application::repositories::video_repository::VideoRepository,
        testing::{fresh_category_id, new_video, pg_pool},
    };

    async fn rows_for(pool: &sqlx::PgPool, video_id: i64, member_id: i64) -> i64 {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM application.reactions WHERE video_id = $1 AND member_id = $2",
        )
        .bind(video_id)
        .bind(member_id)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    async fn seed(pool: &sqlx::PgPool) -> i64 {
        PgVideoRepository::new(pool.clone())
            .create_video(new_video(fresh_category_id(), "clip"))
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn like_then_unlike() {
        let Some(pool) = pg_pool().await else { return };
        let video_id = seed(&pool).await;
        let repo = PgReactionRepository::new(pool.clone());

        assert_eq!(repo.toggle_like(video_id, 7).await.unwrap(), ReactionState::Liked);
        assert_eq!(rows_for(&pool, video_id, 7).await, 1);
        assert_eq!(repo.count_likes(video_id).await.unwrap(), 1);

        assert_eq!(repo.toggle_like(video_id, 7).await.unwrap(), ReactionState::Unliked);
        assert_eq!(rows_for(&pool, video_id, 7).await, 0);
        assert_eq!(repo.count_likes(video_id).await.unwrap(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_toggles_keep_at_most_one_row() {
        let Some(pool) = pg_pool().await else { return };
        let video_id = seed(&pool).await;
        let repo = Arc::new(PgReactionRepository::new(pool.clone()));

        for _ in 0..20 {
            let tasks: Vec<_> = (0..8)
                .map(|_| {
                    let repo = repo.clone();
                    tokio::spawn(async move { repo.toggle_like(video_id, 42).await })
                })
                .collect();
            for task in tasks {
                task.await.unwrap().unwrap();
            }
            assert!(rows_for(&pool, video_id, 42).await <= 1);
        }
    }

    #[tokio::test]
    async fn unknown_video_is_not_found() {
        let Some(pool) = pg_pool().await else { return };
        let repo = PgReactionRepository::new(pool);

        let err = repo.toggle_like(i64::MAX, 1).await.unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound));
    }
}
