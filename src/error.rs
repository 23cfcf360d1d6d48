use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Domain error for every route. Rendered once at the boundary as
/// `{"message": ..., "status_code": ...}` with a matching HTTP status.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or incomplete request payload.
    Validation(String),
    /// The identifier does not resolve to a row the caller may access.
    NotFound(&'static str),
    /// Missing, invalid or expired bearer token.
    Unauthorized(&'static str),
    /// Database failure; logged, never leaked to the client.
    Database(sqlx::Error),
    Internal(&'static str),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    status_code: u16,
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("resource not found"),
            other => ApiError::Database(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message.to_string()),
            ApiError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message.to_string()),
            ApiError::Database(err) => {
                tracing::error!("database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            ApiError::Internal(message) => {
                tracing::error!("internal error: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorBody {
            message,
            status_code: status.as_u16(),
        });

        (status, body).into_response()
    }
}

/// True for UNIQUE constraint failures, which surface to clients as 400s
/// ("already exists") instead of opaque 500s.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => {
            matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation)
        }
        _ => false,
    }
}
