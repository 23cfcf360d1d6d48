use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::{
    AppState,
    db::{Platform, PlatformRepository},
    error::ApiError,
    extract::ValidJson,
    utils::Claims,
};

use super::model::{CreatePlatformRequest, PlatformPatch};

pub async fn create_platform(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<i64>,
    ValidJson(req): ValidJson<CreatePlatformRequest>,
) -> Result<Json<Platform>, ApiError> {
    claims.assert_owner(user_id)?;
    let platform = PlatformRepository::insert(&state.pool, user_id, &req).await?;
    Ok(Json(platform))
}

pub async fn get_platform(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((user_id, platform_id)): Path<(i64, i64)>,
) -> Result<Json<Platform>, ApiError> {
    claims.assert_owner(user_id)?;
    let platform = PlatformRepository::find(&state.pool, user_id, platform_id)
        .await?
        .ok_or(ApiError::NotFound("platform not found"))?;
    Ok(Json(platform))
}

pub async fn list_platforms(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Platform>>, ApiError> {
    claims.assert_owner(user_id)?;
    Ok(Json(PlatformRepository::list(&state.pool, user_id).await?))
}

pub async fn update_platform(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((user_id, platform_id)): Path<(i64, i64)>,
    ValidJson(patch): ValidJson<PlatformPatch>,
) -> Result<Json<Platform>, ApiError> {
    claims.assert_owner(user_id)?;
    let platform = PlatformRepository::update(&state.pool, user_id, platform_id, &patch)
        .await?
        .ok_or(ApiError::NotFound("platform not found"))?;
    Ok(Json(platform))
}

pub async fn delete_platform(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((user_id, platform_id)): Path<(i64, i64)>,
) -> Result<Json<Vec<Platform>>, ApiError> {
    claims.assert_owner(user_id)?;
    if !PlatformRepository::delete(&state.pool, user_id, platform_id).await? {
        return Err(ApiError::NotFound("platform not found"));
    }
    Ok(Json(PlatformRepository::list(&state.pool, user_id).await?))
}
