use serde::Serialize;
use sqlx::{FromRow, SqliteExecutor};

use crate::routes::highlight::model::{CreateHighlightRequest, HighlightPatch};

/// A user-curated notable game.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Highlight {
    pub id: i64,
    pub user_id: i64,
    pub game_name: String,
    pub game_id: String,
}

pub struct HighlightRepository;

impl HighlightRepository {
    pub async fn insert(
        exec: impl SqliteExecutor<'_>,
        user_id: i64,
        req: &CreateHighlightRequest,
    ) -> Result<Highlight, sqlx::Error> {
        sqlx::query_as::<_, Highlight>(
            "INSERT INTO highlights (user_id, game_name, game_id) VALUES (?, ?, ?) \
             RETURNING id, user_id, game_name, game_id",
        )
        .bind(user_id)
        .bind(&req.game_name)
        .bind(&req.game_id)
        .fetch_one(exec)
        .await
    }

    pub async fn find(
        exec: impl SqliteExecutor<'_>,
        user_id: i64,
        id: i64,
    ) -> Result<Option<Highlight>, sqlx::Error> {
        sqlx::query_as::<_, Highlight>(
            "SELECT id, user_id, game_name, game_id FROM highlights WHERE id = ? AND user_id = ?",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(exec)
        .await
    }

    pub async fn list(
        exec: impl SqliteExecutor<'_>,
        user_id: i64,
    ) -> Result<Vec<Highlight>, sqlx::Error> {
        sqlx::query_as::<_, Highlight>(
            "SELECT id, user_id, game_name, game_id FROM highlights \
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
        patch: &HighlightPatch,
    ) -> Result<Option<Highlight>, sqlx::Error> {
        sqlx::query_as::<_, Highlight>(
            "UPDATE highlights SET \
                 game_name = COALESCE(?, game_name), \
                 game_id = COALESCE(?, game_id) \
             WHERE id = ? AND user_id = ? \
             RETURNING id, user_id, game_name, game_id",
        )
        .bind(patch.game_name.as_deref())
        .bind(patch.game_id.as_deref())
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
        let result = sqlx::query("DELETE FROM highlights WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(exec)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
