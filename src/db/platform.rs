use serde::Serialize;
use sqlx::{FromRow, SqliteExecutor};

use crate::routes::platform::model::{CreatePlatformRequest, PlatformPatch};

/// A platform the user owns games on (console, storefront, ...).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Platform {
    pub id: i64,
    pub user_id: i64,
    pub platform_name: String,
    pub platform_id: String,
}

pub struct PlatformRepository;

impl PlatformRepository {
    pub async fn insert(
        exec: impl SqliteExecutor<'_>,
        user_id: i64,
        req: &CreatePlatformRequest,
    ) -> Result<Platform, sqlx::Error> {
        sqlx::query_as::<_, Platform>(
            "INSERT INTO platforms (user_id, platform_name, platform_id) VALUES (?, ?, ?) \
             RETURNING id, user_id, platform_name, platform_id",
        )
        .bind(user_id)
        .bind(&req.platform_name)
        .bind(&req.platform_id)
        .fetch_one(exec)
        .await
    }

    pub async fn find(
        exec: impl SqliteExecutor<'_>,
        user_id: i64,
        id: i64,
    ) -> Result<Option<Platform>, sqlx::Error> {
        sqlx::query_as::<_, Platform>(
            "SELECT id, user_id, platform_name, platform_id FROM platforms \
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
    ) -> Result<Vec<Platform>, sqlx::Error> {
        sqlx::query_as::<_, Platform>(
            "SELECT id, user_id, platform_name, platform_id FROM platforms \
             WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(exec)
        .await
    }

    /// Partial patch: only `Some` fields are applied. `None` return means the
    /// row does not exist for this owner.
    pub async fn update(
        exec: impl SqliteExecutor<'_>,
        user_id: i64,
        id: i64,
        patch: &PlatformPatch,
    ) -> Result<Option<Platform>, sqlx::Error> {
        sqlx::query_as::<_, Platform>(
            "UPDATE platforms SET \
                 platform_name = COALESCE(?, platform_name), \
                 platform_id = COALESCE(?, platform_id) \
             WHERE id = ? AND user_id = ? \
             RETURNING id, user_id, platform_name, platform_id",
        )
        .bind(patch.platform_name.as_deref())
        .bind(patch.platform_id.as_deref())
        .bind(id)
        .bind(user_id)
        .fetch_optional(exec)
        .await
    }

    /// True if a row was deleted, false if no such row for this owner.
    pub async fn delete(
        exec: impl SqliteExecutor<'_>,
        user_id: i64,
        id: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM platforms WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(exec)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
