use serde::Serialize;
use sqlx::{FromRow, SqliteExecutor};

use crate::routes::favorite::model::{CreateFavoriteRequest, FavoritePatch};

/// A favorited game.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub game_name: String,
    pub game_id: String,
    pub game_image: String,
}

pub struct FavoriteRepository;

impl FavoriteRepository {
    pub async fn insert(
        exec: impl SqliteExecutor<'_>,
        user_id: i64,
        req: &CreateFavoriteRequest,
    ) -> Result<Favorite, sqlx::Error> {
        sqlx::query_as::<_, Favorite>(
            "INSERT INTO favorites (user_id, game_name, game_id, game_image) VALUES (?, ?, ?, ?) \
             RETURNING id, user_id, game_name, game_id, game_image",
        )
        .bind(user_id)
        .bind(&req.game_name)
        .bind(&req.game_id)
        .bind(&req.game_image)
        .fetch_one(exec)
        .await
    }

    pub async fn find(
        exec: impl SqliteExecutor<'_>,
        user_id: i64,
        id: i64,
    ) -> Result<Option<Favorite>, sqlx::Error> {
        sqlx::query_as::<_, Favorite>(
            "SELECT id, user_id, game_name, game_id, game_image FROM favorites \
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
    ) -> Result<Vec<Favorite>, sqlx::Error> {
        sqlx::query_as::<_, Favorite>(
            "SELECT id, user_id, game_name, game_id, game_image FROM favorites \
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
        patch: &FavoritePatch,
    ) -> Result<Option<Favorite>, sqlx::Error> {
        sqlx::query_as::<_, Favorite>(
            "UPDATE favorites SET \
                 game_name = COALESCE(?, game_name), \
                 game_id = COALESCE(?, game_id), \
                 game_image = COALESCE(?, game_image) \
             WHERE id = ? AND user_id = ? \
             RETURNING id, user_id, game_name, game_id, game_image",
        )
        .bind(patch.game_name.as_deref())
        .bind(patch.game_id.as_deref())
        .bind(patch.game_image.as_deref())
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
        let result = sqlx::query("DELETE FROM favorites WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(exec)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
