use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::{
    AppState,
    db::{Favorite, FavoriteRepository},
    error::ApiError,
    extract::ValidJson,
    utils::Claims,
};

use super::model::{CreateFavoriteRequest, FavoritePatch};

pub async fn create_favorite(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<i64>,
    ValidJson(req): ValidJson<CreateFavoriteRequest>,
) -> Result<Json<Favorite>, ApiError> {
    claims.assert_owner(user_id)?;
    let favorite = FavoriteRepository::insert(&state.pool, user_id, &req).await?;
    Ok(Json(favorite))
}

pub async fn get_favorite(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((user_id, favorite_id)): Path<(i64, i64)>,
) -> Result<Json<Favorite>, ApiError> {
    claims.assert_owner(user_id)?;
    let favorite = FavoriteRepository::find(&state.pool, user_id, favorite_id)
        .await?
        .ok_or(ApiError::NotFound("favorite not found"))?;
    Ok(Json(favorite))
}

pub async fn list_favorites(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Favorite>>, ApiError> {
    claims.assert_owner(user_id)?;
    Ok(Json(FavoriteRepository::list(&state.pool, user_id).await?))
}

pub async fn update_favorite(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((user_id, favorite_id)): Path<(i64, i64)>,
    ValidJson(patch): ValidJson<FavoritePatch>,
) -> Result<Json<Favorite>, ApiError> {
    claims.assert_owner(user_id)?;
    let favorite = FavoriteRepository::update(&state.pool, user_id, favorite_id, &patch)
        .await?
        .ok_or(ApiError::NotFound("favorite not found"))?;
    Ok(Json(favorite))
}

pub async fn delete_favorite(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((user_id, favorite_id)): Path<(i64, i64)>,
) -> Result<Json<Vec<Favorite>>, ApiError> {
    claims.assert_owner(user_id)?;
    if !FavoriteRepository::delete(&state.pool, user_id, favorite_id).await? {
        return Err(ApiError::NotFound("favorite not found"));
    }
    Ok(Json(FavoriteRepository::list(&state.pool, user_id).await?))
}
