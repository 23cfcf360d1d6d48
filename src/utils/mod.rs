use bcrypt::{DEFAULT_COST, hash, verify};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::ApiError;

pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash(password.as_bytes(), DEFAULT_COST)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password.as_bytes(), hash)
}

/// Bearer token claims. `sub` is the numeric user id the token was issued for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    /// Ownership assertion for collection routes: the path user id must be the
    /// token subject. A mismatch is indistinguishable from an absent user, so
    /// callers get a 404 rather than a hint that the row exists.
    pub fn assert_owner(&self, user_id: i64) -> Result<(), ApiError> {
        if self.sub != user_id {
            return Err(ApiError::NotFound("user not found"));
        }
        Ok(())
    }
}

pub fn generate_token(user_id: i64, config: &Config) -> Result<String, ApiError> {
    let now = Utc::now();
    let expiration = now
        .checked_add_signed(Duration::seconds(config.jwt_expiration().as_secs() as i64))
        .ok_or(ApiError::Internal("token expiry overflow"))?
        .timestamp();

    let claims = Claims {
        sub: user_id,
        exp: expiration,
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|_| ApiError::Internal("failed to sign token"))
}

pub fn verify_token(token: &str, config: &Config) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}
