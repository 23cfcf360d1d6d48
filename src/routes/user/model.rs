use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::{
    BacklogEntry, BacklogRepository, Favorite, FavoriteRepository, GenrePreference,
    GenrePreferenceRepository, Highlight, HighlightRepository, NowPlaying, NowPlayingRepository,
    Platform, PlatformRepository, Sentiment, TagPreference, TagPreferenceRepository, User,
};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user_id: i64,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: UserProfile,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct WhoAmIResponse {
    pub user_id: i64,
}

/// A user with every owned collection eagerly expanded. Expansion is flat and
/// acyclic, so there is no depth to limit.
#[derive(Debug, Serialize)]
pub struct UserProfile {
    #[serde(flatten)]
    pub user: User,
    pub platforms: Vec<Platform>,
    pub backlog: Vec<BacklogEntry>,
    pub highlights: Vec<Highlight>,
    pub playing: Vec<NowPlaying>,
    pub favorites: Vec<Favorite>,
    pub liked: Vec<TagPreference>,
    pub disliked: Vec<TagPreference>,
    pub genre_likes: Vec<GenrePreference>,
    pub genre_dislikes: Vec<GenrePreference>,
}

impl UserProfile {
    pub async fn load(pool: &SqlitePool, user: User) -> Result<Self, sqlx::Error> {
        let user_id = user.id;
        Ok(UserProfile {
            platforms: PlatformRepository::list(pool, user_id).await?,
            backlog: BacklogRepository::list(pool, user_id).await?,
            highlights: HighlightRepository::list(pool, user_id).await?,
            playing: NowPlayingRepository::list(pool, user_id).await?,
            favorites: FavoriteRepository::list(pool, user_id).await?,
            liked: TagPreferenceRepository::list(pool, Sentiment::Like, user_id).await?,
            disliked: TagPreferenceRepository::list(pool, Sentiment::Dislike, user_id).await?,
            genre_likes: GenrePreferenceRepository::list(pool, Sentiment::Like, user_id).await?,
            genre_dislikes: GenrePreferenceRepository::list(pool, Sentiment::Dislike, user_id)
                .await?,
            user,
        })
    }
}
