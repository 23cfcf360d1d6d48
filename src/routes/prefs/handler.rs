//! Like/dislike routes over the tag and genre taxonomies. One thin handler
//! per route, all funneling into the shared sentiment-parameterized helpers.

use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::{
    AppState,
    db::{
        GenrePreference, GenrePreferenceRepository, Sentiment, TagPreference,
        TagPreferenceRepository,
    },
    error::ApiError,
    extract::ValidJson,
    utils::Claims,
};

use super::model::{CreateGenrePreferenceRequest, CreateTagPreferenceRequest};

async fn create_tag_pref(
    state: AppState,
    claims: Claims,
    user_id: i64,
    sentiment: Sentiment,
    req: CreateTagPreferenceRequest,
) -> Result<Json<TagPreference>, ApiError> {
    claims.assert_owner(user_id)?;
    let pref = TagPreferenceRepository::insert(&state.pool, sentiment, user_id, &req).await?;
    Ok(Json(pref))
}

async fn list_tag_prefs(
    state: AppState,
    claims: Claims,
    user_id: i64,
    sentiment: Sentiment,
) -> Result<Json<Vec<TagPreference>>, ApiError> {
    claims.assert_owner(user_id)?;
    Ok(Json(
        TagPreferenceRepository::list(&state.pool, sentiment, user_id).await?,
    ))
}

async fn delete_tag_pref(
    state: AppState,
    claims: Claims,
    user_id: i64,
    id: i64,
    sentiment: Sentiment,
) -> Result<Json<Vec<TagPreference>>, ApiError> {
    claims.assert_owner(user_id)?;
    if !TagPreferenceRepository::delete(&state.pool, sentiment, user_id, id).await? {
        return Err(ApiError::NotFound("tag preference not found"));
    }
    Ok(Json(
        TagPreferenceRepository::list(&state.pool, sentiment, user_id).await?,
    ))
}

async fn create_genre_pref(
    state: AppState,
    claims: Claims,
    user_id: i64,
    sentiment: Sentiment,
    req: CreateGenrePreferenceRequest,
) -> Result<Json<GenrePreference>, ApiError> {
    claims.assert_owner(user_id)?;
    let pref = GenrePreferenceRepository::insert(&state.pool, sentiment, user_id, &req).await?;
    Ok(Json(pref))
}

async fn list_genre_prefs(
    state: AppState,
    claims: Claims,
    user_id: i64,
    sentiment: Sentiment,
) -> Result<Json<Vec<GenrePreference>>, ApiError> {
    claims.assert_owner(user_id)?;
    Ok(Json(
        GenrePreferenceRepository::list(&state.pool, sentiment, user_id).await?,
    ))
}

async fn delete_genre_pref(
    state: AppState,
    claims: Claims,
    user_id: i64,
    id: i64,
    sentiment: Sentiment,
) -> Result<Json<Vec<GenrePreference>>, ApiError> {
    claims.assert_owner(user_id)?;
    if !GenrePreferenceRepository::delete(&state.pool, sentiment, user_id, id).await? {
        return Err(ApiError::NotFound("genre preference not found"));
    }
    Ok(Json(
        GenrePreferenceRepository::list(&state.pool, sentiment, user_id).await?,
    ))
}

pub async fn like_tag(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<i64>,
    ValidJson(req): ValidJson<CreateTagPreferenceRequest>,
) -> Result<Json<TagPreference>, ApiError> {
    create_tag_pref(state, claims, user_id, Sentiment::Like, req).await
}

pub async fn list_liked_tags(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<TagPreference>>, ApiError> {
    list_tag_prefs(state, claims, user_id, Sentiment::Like).await
}

pub async fn delete_liked_tag(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((user_id, id)): Path<(i64, i64)>,
) -> Result<Json<Vec<TagPreference>>, ApiError> {
    delete_tag_pref(state, claims, user_id, id, Sentiment::Like).await
}

pub async fn dislike_tag(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<i64>,
    ValidJson(req): ValidJson<CreateTagPreferenceRequest>,
) -> Result<Json<TagPreference>, ApiError> {
    create_tag_pref(state, claims, user_id, Sentiment::Dislike, req).await
}

pub async fn list_disliked_tags(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<TagPreference>>, ApiError> {
    list_tag_prefs(state, claims, user_id, Sentiment::Dislike).await
}

pub async fn delete_disliked_tag(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((user_id, id)): Path<(i64, i64)>,
) -> Result<Json<Vec<TagPreference>>, ApiError> {
    delete_tag_pref(state, claims, user_id, id, Sentiment::Dislike).await
}

pub async fn like_genre(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<i64>,
    ValidJson(req): ValidJson<CreateGenrePreferenceRequest>,
) -> Result<Json<GenrePreference>, ApiError> {
    create_genre_pref(state, claims, user_id, Sentiment::Like, req).await
}

pub async fn list_liked_genres(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<GenrePreference>>, ApiError> {
    list_genre_prefs(state, claims, user_id, Sentiment::Like).await
}

pub async fn delete_liked_genre(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((user_id, id)): Path<(i64, i64)>,
) -> Result<Json<Vec<GenrePreference>>, ApiError> {
    delete_genre_pref(state, claims, user_id, id, Sentiment::Like).await
}

pub async fn dislike_genre(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<i64>,
    ValidJson(req): ValidJson<CreateGenrePreferenceRequest>,
) -> Result<Json<GenrePreference>, ApiError> {
    create_genre_pref(state, claims, user_id, Sentiment::Dislike, req).await
}

pub async fn list_disliked_genres(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<GenrePreference>>, ApiError> {
    list_genre_prefs(state, claims, user_id, Sentiment::Dislike).await
}

pub async fn delete_disliked_genre(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((user_id, id)): Path<(i64, i64)>,
) -> Result<Json<Vec<GenrePreference>>, ApiError> {
    delete_genre_pref(state, claims, user_id, id, Sentiment::Dislike).await
}
