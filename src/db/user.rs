use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::{FromRow, SqliteExecutor};

/// Account row. The password hash never serializes; responses that embed a
/// `User` can only ever leak its public columns.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub about: Option<String>,
    pub image: Option<String>,
    pub created_at: NaiveDateTime,
}

const COLUMNS: &str = "id, email, username, password_hash, about, image, created_at";

pub struct UserRepository;

impl UserRepository {
    pub async fn insert(
        exec: impl SqliteExecutor<'_>,
        email: &str,
        username: &str,
        password_hash: &str,
        about: Option<&str>,
        image: Option<&str>,
    ) -> Result<User, sqlx::Error> {
        let sql = format!(
            "INSERT INTO users (email, username, password_hash, about, image) \
             VALUES (?, ?, ?, ?, ?) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .bind(username)
            .bind(password_hash)
            .bind(about)
            .bind(image)
            .fetch_one(exec)
            .await
    }

    pub async fn find_by_id(
        exec: impl SqliteExecutor<'_>,
        id: i64,
    ) -> Result<Option<User>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM users WHERE id = ?");
        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(exec)
            .await
    }

    pub async fn find_by_username(
        exec: impl SqliteExecutor<'_>,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM users WHERE username = ?");
        sqlx::query_as::<_, User>(&sql)
            .bind(username)
            .fetch_optional(exec)
            .await
    }

    pub async fn list(exec: impl SqliteExecutor<'_>) -> Result<Vec<User>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM users ORDER BY id");
        sqlx::query_as::<_, User>(&sql).fetch_all(exec).await
    }
}
