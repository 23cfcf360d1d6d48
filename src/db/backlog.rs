use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqliteExecutor};

use crate::routes::backlog::model::{BacklogPatch, CreateBacklogRequest};

/// Closed progression enumeration, stored as TEXT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum ProgressStatus {
    New,
    Progressing,
    Finished,
    Completed,
}

impl Default for ProgressStatus {
    fn default() -> Self {
        ProgressStatus::New
    }
}

/// A game the user intends to play or is tracking, with progress status.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BacklogEntry {
    pub id: i64,
    pub user_id: i64,
    pub game_id: String,
    pub game_name: String,
    pub game_image: String,
    pub game_genre: Option<String>,
    pub progress_status: ProgressStatus,
}

const COLUMNS: &str = "id, user_id, game_id, game_name, game_image, game_genre, progress_status";

pub struct BacklogRepository;

impl BacklogRepository {
    /// `(user_id, game_id)` is unique; a duplicate surfaces as a database
    /// unique violation for the handler to translate.
    pub async fn insert(
        exec: impl SqliteExecutor<'_>,
        user_id: i64,
        req: &CreateBacklogRequest,
    ) -> Result<BacklogEntry, sqlx::Error> {
        let sql = format!(
            "INSERT INTO backlog (user_id, game_id, game_name, game_image, game_genre, progress_status) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BacklogEntry>(&sql)
            .bind(user_id)
            .bind(&req.game_id)
            .bind(&req.game_name)
            .bind(&req.game_image)
            .bind(req.game_genre.as_deref())
            .bind(req.progress_status)
            .fetch_one(exec)
            .await
    }

    pub async fn find(
        exec: impl SqliteExecutor<'_>,
        user_id: i64,
        id: i64,
    ) -> Result<Option<BacklogEntry>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM backlog WHERE id = ? AND user_id = ?");
        sqlx::query_as::<_, BacklogEntry>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(exec)
            .await
    }

    pub async fn list(
        exec: impl SqliteExecutor<'_>,
        user_id: i64,
    ) -> Result<Vec<BacklogEntry>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM backlog WHERE user_id = ? ORDER BY id");
        sqlx::query_as::<_, BacklogEntry>(&sql)
            .bind(user_id)
            .fetch_all(exec)
            .await
    }

    pub async fn update(
        exec: impl SqliteExecutor<'_>,
        user_id: i64,
        id: i64,
        patch: &BacklogPatch,
    ) -> Result<Option<BacklogEntry>, sqlx::Error> {
        let sql = format!(
            "UPDATE backlog SET \
                 game_id = COALESCE(?, game_id), \
                 game_name = COALESCE(?, game_name), \
                 game_image = COALESCE(?, game_image), \
                 game_genre = COALESCE(?, game_genre), \
                 progress_status = COALESCE(?, progress_status) \
             WHERE id = ? AND user_id = ? RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BacklogEntry>(&sql)
            .bind(patch.game_id.as_deref())
            .bind(patch.game_name.as_deref())
            .bind(patch.game_image.as_deref())
            .bind(patch.game_genre.as_deref())
            .bind(patch.progress_status)
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
        let result = sqlx::query("DELETE FROM backlog WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(exec)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_status_serializes_screaming() {
        assert_eq!(
            serde_json::to_string(&ProgressStatus::Progressing).unwrap(),
            "\"PROGRESSING\""
        );
        let parsed: ProgressStatus = serde_json::from_str("\"COMPLETED\"").unwrap();
        assert_eq!(parsed, ProgressStatus::Completed);
    }

    #[test]
    fn progress_status_rejects_unknown_variant() {
        assert!(serde_json::from_str::<ProgressStatus>("\"DROPPED\"").is_err());
    }
}
