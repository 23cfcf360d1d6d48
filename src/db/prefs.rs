//! Tag and genre preference markers. Four tables with the same shape
//! (like/dislike over two taxonomies), collapsed into two repositories over
//! shared generic helpers; the table and column names come from a closed
//! match, never from request input.

use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, SqliteExecutor};

use crate::routes::prefs::model::{CreateGenrePreferenceRequest, CreateTagPreferenceRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Like,
    Dislike,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TagPreference {
    pub id: i64,
    pub user_id: i64,
    pub tag_name: String,
    pub tag_id: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct GenrePreference {
    pub id: i64,
    pub user_id: i64,
    pub genre_name: String,
    pub genre_id: String,
}

async fn insert_row<T>(
    exec: impl SqliteExecutor<'_>,
    table: &str,
    name_col: &str,
    id_col: &str,
    user_id: i64,
    name: &str,
    ref_id: &str,
) -> Result<T, sqlx::Error>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let sql = format!(
        "INSERT INTO {table} (user_id, {name_col}, {id_col}) VALUES (?, ?, ?) \
         RETURNING id, user_id, {name_col}, {id_col}"
    );
    sqlx::query_as::<_, T>(&sql)
        .bind(user_id)
        .bind(name)
        .bind(ref_id)
        .fetch_one(exec)
        .await
}

async fn list_rows<T>(
    exec: impl SqliteExecutor<'_>,
    table: &str,
    name_col: &str,
    id_col: &str,
    user_id: i64,
) -> Result<Vec<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let sql = format!(
        "SELECT id, user_id, {name_col}, {id_col} FROM {table} WHERE user_id = ? ORDER BY id"
    );
    sqlx::query_as::<_, T>(&sql).bind(user_id).fetch_all(exec).await
}

async fn delete_row(
    exec: impl SqliteExecutor<'_>,
    table: &str,
    user_id: i64,
    id: i64,
) -> Result<bool, sqlx::Error> {
    let sql = format!("DELETE FROM {table} WHERE id = ? AND user_id = ?");
    let result = sqlx::query(&sql).bind(id).bind(user_id).execute(exec).await?;
    Ok(result.rows_affected() > 0)
}

pub struct TagPreferenceRepository;

impl TagPreferenceRepository {
    fn table(sentiment: Sentiment) -> &'static str {
        match sentiment {
            Sentiment::Like => "tag_likes",
            Sentiment::Dislike => "tag_dislikes",
        }
    }

    pub async fn insert(
        exec: impl SqliteExecutor<'_>,
        sentiment: Sentiment,
        user_id: i64,
        req: &CreateTagPreferenceRequest,
    ) -> Result<TagPreference, sqlx::Error> {
        insert_row(
            exec,
            Self::table(sentiment),
            "tag_name",
            "tag_id",
            user_id,
            &req.tag_name,
            &req.tag_id,
        )
        .await
    }

    pub async fn list(
        exec: impl SqliteExecutor<'_>,
        sentiment: Sentiment,
        user_id: i64,
    ) -> Result<Vec<TagPreference>, sqlx::Error> {
        list_rows(exec, Self::table(sentiment), "tag_name", "tag_id", user_id).await
    }

    pub async fn delete(
        exec: impl SqliteExecutor<'_>,
        sentiment: Sentiment,
        user_id: i64,
        id: i64,
    ) -> Result<bool, sqlx::Error> {
        delete_row(exec, Self::table(sentiment), user_id, id).await
    }
}

pub struct GenrePreferenceRepository;

impl GenrePreferenceRepository {
    fn table(sentiment: Sentiment) -> &'static str {
        match sentiment {
            Sentiment::Like => "genre_likes",
            Sentiment::Dislike => "genre_dislikes",
        }
    }

    pub async fn insert(
        exec: impl SqliteExecutor<'_>,
        sentiment: Sentiment,
        user_id: i64,
        req: &CreateGenrePreferenceRequest,
    ) -> Result<GenrePreference, sqlx::Error> {
        insert_row(
            exec,
            Self::table(sentiment),
            "genre_name",
            "genre_id",
            user_id,
            &req.genre_name,
            &req.genre_id,
        )
        .await
    }

    pub async fn list(
        exec: impl SqliteExecutor<'_>,
        sentiment: Sentiment,
        user_id: i64,
    ) -> Result<Vec<GenrePreference>, sqlx::Error> {
        list_rows(exec, Self::table(sentiment), "genre_name", "genre_id", user_id).await
    }

    pub async fn delete(
        exec: impl SqliteExecutor<'_>,
        sentiment: Sentiment,
        user_id: i64,
        id: i64,
    ) -> Result<bool, sqlx::Error> {
        delete_row(exec, Self::table(sentiment), user_id, id).await
    }
}
