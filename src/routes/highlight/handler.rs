use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::{
    AppState,
    db::{Highlight, HighlightRepository},
    error::ApiError,
    extract::ValidJson,
    utils::Claims,
};

use super::model::{CreateHighlightRequest, HighlightPatch};

pub async fn create_highlight(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<i64>,
    ValidJson(req): ValidJson<CreateHighlightRequest>,
) -> Result<Json<Highlight>, ApiError> {
    claims.assert_owner(user_id)?;
    let highlight = HighlightRepository::insert(&state.pool, user_id, &req).await?;
    Ok(Json(highlight))
}

pub async fn get_highlight(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((user_id, highlight_id)): Path<(i64, i64)>,
) -> Result<Json<Highlight>, ApiError> {
    claims.assert_owner(user_id)?;
    let highlight = HighlightRepository::find(&state.pool, user_id, highlight_id)
        .await?
        .ok_or(ApiError::NotFound("highlight not found"))?;
    Ok(Json(highlight))
}

pub async fn list_highlights(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Highlight>>, ApiError> {
    claims.assert_owner(user_id)?;
    Ok(Json(HighlightRepository::list(&state.pool, user_id).await?))
}

pub async fn update_highlight(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((user_id, highlight_id)): Path<(i64, i64)>,
    ValidJson(patch): ValidJson<HighlightPatch>,
) -> Result<Json<Highlight>, ApiError> {
    claims.assert_owner(user_id)?;
    let highlight = HighlightRepository::update(&state.pool, user_id, highlight_id, &patch)
        .await?
        .ok_or(ApiError::NotFound("highlight not found"))?;
    Ok(Json(highlight))
}

pub async fn delete_highlight(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((user_id, highlight_id)): Path<(i64, i64)>,
) -> Result<Json<Vec<Highlight>>, ApiError> {
    claims.assert_owner(user_id)?;
    if !HighlightRepository::delete(&state.pool, user_id, highlight_id).await? {
        return Err(ApiError::NotFound("highlight not found"));
    }
    Ok(Json(HighlightRepository::list(&state.pool, user_id).await?))
}
