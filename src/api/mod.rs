//! # API Module
//!
//! HTTP endpoints of the Statify backend, built on
//! [Axum](https://docs.rs/axum).
//!
//! ## Endpoints
//!
//! ### Service
//!
//! - [`root`] - `GET /`, service metadata
//! - [`health`] - `GET /health`, liveness check
//!
//! ### Authentication
//!
//! - [`login`] - `GET /api/auth/login`, returns the Spotify authorization URL
//! - [`callback`] - `GET /callback`, exchanges the code and redirects to the
//!   dashboard frontend with the access token
//!
//! ### Artists
//!
//! Every route below requires a `token` query parameter holding a Spotify
//! access token; see [`AccessToken`].
//!
//! - [`search_artists`] - `GET /api/artist/search`
//! - [`artist_overview`] - `GET /api/artist/{id}/overview`
//! - [`artist_top_tracks`] - `GET /api/artist/{id}/top-tracks`
//! - [`artist_albums`] - `GET /api/artist/{id}/albums`
//! - [`related_artists`] - `GET /api/artist/{id}/related-artists`
//! - [`artist_playlists`] - `GET /api/artist/{id}/playlists`
//! - [`artist_analytics`] - `GET /api/artist/{id}/analytics`
//!
//! ### User statistics
//!
//! Same `token` requirement. `time_range` is one of `short_term`,
//! `medium_term` (default) or `long_term`.
//!
//! - [`user_profile`] - `GET /api/user/profile`
//! - [`user_top_tracks`] - `GET /api/stats/top-tracks`
//! - [`user_top_artists`] - `GET /api/stats/top-artists`
//! - [`user_genres`] - `GET /api/stats/genres`
//! - [`recently_played`] - `GET /api/stats/recently-played`
//!
//! ## Errors
//!
//! Handlers return [`crate::error::ApiError`], rendered as
//! `{"detail": "..."}` with the matching status code.

mod artist;
mod callback;
mod health;
mod token;
mod user;

pub use artist::{
    artist_albums, artist_analytics, artist_overview, artist_playlists, artist_top_tracks,
    related_artists, search_artists,
};
pub use callback::{callback, login};
pub use health::{health, root};
pub use token::AccessToken;
pub use user::{recently_played, user_genres, user_profile, user_top_artists, user_top_tracks};

use crate::spotify::auth::TokenGateway;

pub const SERVICE_NAME: &str = "Statify Artist Dashboard API";

/// Shared router state. Read-only after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub gateway: TokenGateway,
}
