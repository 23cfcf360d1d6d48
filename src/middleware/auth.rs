use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{AppState, error::ApiError, utils::verify_token};

/// Verifies the `Authorization: Bearer <token>` header and injects the decoded
/// [`Claims`](crate::utils::Claims) as a request extension for handlers.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .ok_or(ApiError::Unauthorized("missing bearer token"))?;

    let claims = verify_token(token, &state.config)
        .map_err(|_| ApiError::Unauthorized("invalid or expired token"))?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
