use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::{
    AppState,
    db::{BacklogEntry, BacklogRepository, PlatformRepository},
    error::{ApiError, is_unique_violation},
    extract::ValidJson,
    utils::Claims,
};

use super::model::{BacklogPatch, CreateBacklogRequest, CreateBacklogResponse};

/// Creates the entry and any bundled platforms atomically: either the whole
/// request lands or none of it does.
pub async fn create_entry(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<i64>,
    ValidJson(req): ValidJson<CreateBacklogRequest>,
) -> Result<Json<CreateBacklogResponse>, ApiError> {
    claims.assert_owner(user_id)?;

    let mut tx = state.pool.begin().await?;
    let entry = BacklogRepository::insert(&mut *tx, user_id, &req)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::Validation("game is already in this user's backlog".into())
            } else {
                e.into()
            }
        })?;

    let mut platforms = Vec::with_capacity(req.platforms.len());
    for platform in &req.platforms {
        platforms.push(PlatformRepository::insert(&mut *tx, user_id, platform).await?);
    }
    tx.commit().await?;

    tracing::debug!("user {} added backlog entry {}", user_id, entry.id);
    Ok(Json(CreateBacklogResponse { entry, platforms }))
}

pub async fn get_entry(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((user_id, entry_id)): Path<(i64, i64)>,
) -> Result<Json<BacklogEntry>, ApiError> {
    claims.assert_owner(user_id)?;
    let entry = BacklogRepository::find(&state.pool, user_id, entry_id)
        .await?
        .ok_or(ApiError::NotFound("backlog entry not found"))?;
    Ok(Json(entry))
}

pub async fn list_entries(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<BacklogEntry>>, ApiError> {
    claims.assert_owner(user_id)?;
    Ok(Json(BacklogRepository::list(&state.pool, user_id).await?))
}

pub async fn update_entry(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((user_id, entry_id)): Path<(i64, i64)>,
    ValidJson(patch): ValidJson<BacklogPatch>,
) -> Result<Json<BacklogEntry>, ApiError> {
    claims.assert_owner(user_id)?;
    let entry = BacklogRepository::update(&state.pool, user_id, entry_id, &patch)
        .await?
        .ok_or(ApiError::NotFound("backlog entry not found"))?;
    Ok(Json(entry))
}

/// Removes one entry and returns what remains for the user.
pub async fn delete_entry(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((user_id, entry_id)): Path<(i64, i64)>,
) -> Result<Json<Vec<BacklogEntry>>, ApiError> {
    claims.assert_owner(user_id)?;
    if !BacklogRepository::delete(&state.pool, user_id, entry_id).await? {
        return Err(ApiError::NotFound("backlog entry not found"));
    }
    Ok(Json(BacklogRepository::list(&state.pool, user_id).await?))
}
