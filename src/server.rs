use std::{net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
use reqwest::Client;
use tower_http::cors::CorsLayer;

use crate::{
    Res, api,
    api::AppState,
    config::Config,
    info,
    spotify::auth::TokenGateway,
};

/// Builds the application router with permissive CORS for the dashboard
/// frontend.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::root))
        .route("/health", get(api::health))
        .route("/api/auth/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/api/artist/search", get(api::search_artists))
        .route("/api/artist/{id}/overview", get(api::artist_overview))
        .route("/api/artist/{id}/top-tracks", get(api::artist_top_tracks))
        .route("/api/artist/{id}/albums", get(api::artist_albums))
        .route("/api/artist/{id}/related-artists", get(api::related_artists))
        .route("/api/artist/{id}/playlists", get(api::artist_playlists))
        .route("/api/artist/{id}/analytics", get(api::artist_analytics))
        .route("/api/user/profile", get(api::user_profile))
        .route("/api/stats/top-tracks", get(api::user_top_tracks))
        .route("/api/stats/top-artists", get(api::user_top_artists))
        .route("/api/stats/genres", get(api::user_genres))
        .route("/api/stats/recently-played", get(api::recently_played))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Creates the shared state from a configuration.
pub fn app_state(config: Config) -> AppState {
    AppState {
        gateway: TokenGateway::new(Arc::new(config), Client::new()),
    }
}

/// Binds to `addr` (or the configured address) and serves until the
/// process is stopped.
pub async fn start_api_server(config: Config, addr: Option<SocketAddr>) -> Res<()> {
    let addr = addr.unwrap_or(config.server_addr);
    let app = router(app_state(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Statify listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
