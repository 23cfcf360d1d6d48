use std::net::{IpAddr, SocketAddr};

use gamelog_backend::{AppState, config::Config, init_db, make_router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().expect("Failed to load configuration");

    let pool = init_db(&config.database_url)
        .await
        .expect("Failed to set up database");

    let state = AppState {
        pool,
        config: config.clone(),
    };

    let router = make_router(state);

    #[cfg(debug_assertions)]
    let router = {
        tracing::debug!("adding permissive CORS layer for development mode");
        router.layer(tower_http::cors::CorsLayer::permissive())
    };

    let addr = SocketAddr::new(
        config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("invalid SERVER_HOST, falling back to localhost");
            IpAddr::from([127, 0, 0, 1])
        }),
        config.server_port,
    );
    tracing::info!("server listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        router,
    )
    .await
    .expect("Failed to start server");
}
