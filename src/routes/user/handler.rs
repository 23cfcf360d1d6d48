use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::{
    AppState,
    db::{User, UserRepository},
    error::{ApiError, is_unique_violation},
    extract::ValidJson,
    utils::{Claims, generate_token, hash_password, verify_password},
};

use super::model::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserProfile, WhoAmIResponse,
};

pub async fn register(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let password_hash =
        hash_password(&req.password).map_err(|_| ApiError::Internal("failed to hash password"))?;

    let user = UserRepository::insert(
        &state.pool,
        &req.email,
        &req.username,
        &password_hash,
        req.about.as_deref(),
        req.image.as_deref(),
    )
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            ApiError::Validation("email or username already taken".into())
        } else {
            e.into()
        }
    })?;

    tracing::info!("registered user {} ({})", user.username, user.id);

    let token = generate_token(user.id, &state.config)?;
    let user = UserProfile::load(&state.pool, user).await?;
    Ok(Json(RegisterResponse { user, token }))
}

pub async fn login(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    // an unknown username and a bad password are indistinguishable on purpose
    let user = UserRepository::find_by_username(&state.pool, &req.username)
        .await?
        .ok_or_else(|| ApiError::Validation("invalid username or password".into()))?;

    let password_matches = verify_password(&req.password, &user.password_hash)
        .map_err(|_| ApiError::Internal("failed to verify password"))?;
    if !password_matches {
        return Err(ApiError::Validation("invalid username or password".into()));
    }

    let token = generate_token(user.id, &state.config)?;
    Ok(Json(LoginResponse {
        user_id: user.id,
        token,
    }))
}

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserProfile>>, ApiError> {
    let users = UserRepository::list(&state.pool).await?;
    let mut profiles = Vec::with_capacity(users.len());
    for user in users {
        profiles.push(UserProfile::load(&state.pool, user).await?);
    }
    Ok(Json(profiles))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserProfile>, ApiError> {
    let user = UserRepository::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(ApiError::NotFound("user not found"))?;
    Ok(Json(UserProfile::load(&state.pool, user).await?))
}

pub async fn get_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserProfile>, ApiError> {
    let user: User = UserRepository::find_by_username(&state.pool, &username)
        .await?
        .ok_or(ApiError::NotFound("user not found"))?;
    Ok(Json(UserProfile::load(&state.pool, user).await?))
}

/// Echo of the verified token subject; exists so clients can validate a
/// stored token without fetching anything.
pub async fn whoami(Extension(claims): Extension<Claims>) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse {
        user_id: claims.sub,
    })
}
