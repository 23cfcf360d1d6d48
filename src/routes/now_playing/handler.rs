use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::{
    AppState,
    db::{NowPlaying, NowPlayingRepository},
    error::ApiError,
    extract::ValidJson,
    utils::Claims,
};

use super::model::{CreateNowPlayingRequest, NowPlayingPatch};

pub async fn create_now_playing(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<i64>,
    ValidJson(req): ValidJson<CreateNowPlayingRequest>,
) -> Result<Json<NowPlaying>, ApiError> {
    claims.assert_owner(user_id)?;
    let playing = NowPlayingRepository::insert(&state.pool, user_id, &req).await?;
    Ok(Json(playing))
}

pub async fn get_now_playing(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((user_id, playing_id)): Path<(i64, i64)>,
) -> Result<Json<NowPlaying>, ApiError> {
    claims.assert_owner(user_id)?;
    let playing = NowPlayingRepository::find(&state.pool, user_id, playing_id)
        .await?
        .ok_or(ApiError::NotFound("now-playing entry not found"))?;
    Ok(Json(playing))
}

pub async fn list_now_playing(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<NowPlaying>>, ApiError> {
    claims.assert_owner(user_id)?;
    Ok(Json(NowPlayingRepository::list(&state.pool, user_id).await?))
}

pub async fn update_now_playing(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((user_id, playing_id)): Path<(i64, i64)>,
    ValidJson(patch): ValidJson<NowPlayingPatch>,
) -> Result<Json<NowPlaying>, ApiError> {
    claims.assert_owner(user_id)?;
    let playing = NowPlayingRepository::update(&state.pool, user_id, playing_id, &patch)
        .await?
        .ok_or(ApiError::NotFound("now-playing entry not found"))?;
    Ok(Json(playing))
}

pub async fn delete_now_playing(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((user_id, playing_id)): Path<(i64, i64)>,
) -> Result<Json<Vec<NowPlaying>>, ApiError> {
    claims.assert_owner(user_id)?;
    if !NowPlayingRepository::delete(&state.pool, user_id, playing_id).await? {
        return Err(ApiError::NotFound("now-playing entry not found"));
    }
    Ok(Json(NowPlayingRepository::list(&state.pool, user_id).await?))
}
