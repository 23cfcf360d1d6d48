use axum::{
    Router,
    routing::{get, post},
};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod utils;

use config::Config;
use error::ApiError;
use middleware::{auth_middleware, log_errors};

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
}

/// Creates the database file if needed, connects and runs the embedded
/// migrations.
pub async fn init_db(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::migrate::MigrateDatabase;

    if !sqlx::Sqlite::database_exists(database_url)
        .await
        .unwrap_or(false)
    {
        tracing::info!("creating database {}", database_url);
        sqlx::Sqlite::create_database(database_url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    Ok(pool)
}

/// The canonical route set. `/register` and `/login` are public; everything
/// else sits behind the bearer-token middleware.
pub fn make_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/register", post(routes::user::handler::register))
        .route("/login", post(routes::user::handler::login));

    let protected_routes = Router::new()
        .route("/users", get(routes::user::handler::list_users))
        .route("/user/{user_id}", get(routes::user::handler::get_user))
        .route("/profile/{username}", get(routes::user::handler::get_profile))
        .route("/protected", get(routes::user::handler::whoami))
        // backlog
        .route(
            "/user/{user_id}/backlog",
            post(routes::backlog::handler::create_entry).get(routes::backlog::handler::list_entries),
        )
        .route(
            "/user/{user_id}/backlog/{entry_id}",
            get(routes::backlog::handler::get_entry)
                .put(routes::backlog::handler::update_entry)
                .delete(routes::backlog::handler::delete_entry),
        )
        // platforms
        .route(
            "/user/{user_id}/plat",
            post(routes::platform::handler::create_platform)
                .get(routes::platform::handler::list_platforms),
        )
        .route(
            "/user/{user_id}/plat/{platform_id}",
            get(routes::platform::handler::get_platform)
                .put(routes::platform::handler::update_platform)
                .delete(routes::platform::handler::delete_platform),
        )
        // highlights
        .route(
            "/user/{user_id}/hl",
            post(routes::highlight::handler::create_highlight)
                .get(routes::highlight::handler::list_highlights),
        )
        .route(
            "/user/{user_id}/hl/{highlight_id}",
            get(routes::highlight::handler::get_highlight)
                .put(routes::highlight::handler::update_highlight)
                .delete(routes::highlight::handler::delete_highlight),
        )
        // now playing
        .route(
            "/user/{user_id}/nplay",
            post(routes::now_playing::handler::create_now_playing)
                .get(routes::now_playing::handler::list_now_playing),
        )
        .route(
            "/user/{user_id}/nplay/{playing_id}",
            get(routes::now_playing::handler::get_now_playing)
                .put(routes::now_playing::handler::update_now_playing)
                .delete(routes::now_playing::handler::delete_now_playing),
        )
        // favorites
        .route(
            "/user/{user_id}/fav",
            post(routes::favorite::handler::create_favorite)
                .get(routes::favorite::handler::list_favorites),
        )
        .route(
            "/user/{user_id}/fav/{favorite_id}",
            get(routes::favorite::handler::get_favorite)
                .put(routes::favorite::handler::update_favorite)
                .delete(routes::favorite::handler::delete_favorite),
        )
        // tag and genre preferences
        .route(
            "/user/{user_id}/like",
            post(routes::prefs::handler::like_tag).get(routes::prefs::handler::list_liked_tags),
        )
        .route(
            "/user/{user_id}/like/{id}",
            axum::routing::delete(routes::prefs::handler::delete_liked_tag),
        )
        .route(
            "/user/{user_id}/dislike",
            post(routes::prefs::handler::dislike_tag)
                .get(routes::prefs::handler::list_disliked_tags),
        )
        .route(
            "/user/{user_id}/dislike/{id}",
            axum::routing::delete(routes::prefs::handler::delete_disliked_tag),
        )
        .route(
            "/user/{user_id}/genrelikes",
            post(routes::prefs::handler::like_genre)
                .get(routes::prefs::handler::list_liked_genres),
        )
        .route(
            "/user/{user_id}/genrelikes/{id}",
            axum::routing::delete(routes::prefs::handler::delete_liked_genre),
        )
        .route(
            "/user/{user_id}/genredislikes",
            post(routes::prefs::handler::dislike_genre)
                .get(routes::prefs::handler::list_disliked_genres),
        )
        .route(
            "/user/{user_id}/genredislikes/{id}",
            axum::routing::delete(routes::prefs::handler::delete_disliked_genre),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback(not_found)
        .layer(axum::middleware::from_fn(log_errors))
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound("route not found")
}
