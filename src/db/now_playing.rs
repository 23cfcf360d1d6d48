use serde::Serialize;
use sqlx::{FromRow, SqliteExecutor};

use crate::routes::now_playing::model::{CreateNowPlayingRequest, NowPlayingPatch};

/// A game currently being played, with free-text notes.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct NowPlaying {
    pub id: i64,
    pub user_id: i64,
    pub game_name: String,
    pub game_id: String,
    pub notes: String,
}

pub struct NowPlayingRepository;

impl NowPlayingRepository {
    pub async fn insert(
        exec: impl SqliteExecutor<'_>,
        user_id: i64,
        req: &CreateNowPlayingRequest,
    ) -> Result<NowPlaying, sqlx::Error> {
        sqlx::query_as::<_, NowPlaying>(
            "INSERT INTO now_playing (user_id, game_name, game_id, notes) VALUES (?, ?, ?, ?) \
             RETURNING id, user_id, game_name, game_id, notes",
        )
        .bind(user_id)
        .bind(&req.game_name)
        .bind(&req.game_id)
        .bind(&req.notes)
        .fetch_one(exec)
        .await
    }

    pub async fn find(
        exec: impl SqliteExecutor<'_>,
        user_id: i64,
        id: i64,
    ) -> Result<Option<NowPlaying>, sqlx::Error> {
        sqlx::query_as::<_, NowPlaying>(
            "SELECT id, user_id, game_name, game_id, notes FROM now_playing \
             WHERE id = ? AND user_id = ?",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(exec)
        .await
    }

    pub async fn list(
        exec: impl SqliteExecutor<'_>,
        user_id: i64,
    ) -> Result<Vec<NowPlaying>, sqlx::Error> {
        sqlx::query_as::<_, NowPlaying>(
            "SELECT id, user_id, game_name, game_id, notes FROM now_playing \
             WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(exec)
        .await
    }

    pub async fn update(
        exec: impl SqliteExecutor<'_>,
        user_id: i64,
        id: i64,
        patch: &NowPlayingPatch,
    ) -> Result<Option<NowPlaying>, sqlx::Error> {
        sqlx::query_as::<_, NowPlaying>(
            "UPDATE now_playing SET \
                 game_name = COALESCE(?, game_name), \
                 game_id = COALESCE(?, game_id), \
                 notes = COALESCE(?, notes) \
             WHERE id = ? AND user_id = ? \
             RETURNING id, user_id, game_name, game_id, notes",
        )
        .bind(patch.game_name.as_deref())
        .bind(patch.game_id.as_deref())
        .bind(patch.notes.as_deref())
        .bind(id)
        .bind(user_id)
        .fetch_optional(exec)
        .await
    }

    pub async fn delete(
        exec: impl SqliteExecutor<'_>,
        user_id: i64,
        id: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM now_playing WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(exec)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
