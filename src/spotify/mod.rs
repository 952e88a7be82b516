//! # Spotify Integration Module
//!
//! This module is the integration layer between the Statify backend and the
//! Spotify Web API. It covers the OAuth 2.0 authorization-code flow and the
//! read-only catalog and user endpoints the dashboard needs.
//!
//! ## Architecture
//!
//! ```text
//! HTTP handlers / Analytics
//!          ↓
//! TokenGateway ── wrap_token ──→ SpotifyClient (per request)
//!          ↓                            ↓
//! Accounts service               Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - [`auth::TokenGateway`]: authorization URL, code exchange and
//!   construction of per-request clients
//! - [`artists`] - artist profile, top tracks and related artists
//! - [`albums`] - artist discography
//! - [`search`] - artist and playlist search
//! - [`me`] - the signed-in user's profile, top items and listening history
//! - [`models`] - typed views of the upstream JSON payloads
//!
//! ## Error Handling
//!
//! Every call returns [`SpotifyError`]. An HTTP 401 from Spotify becomes
//! [`SpotifyError::Unauthorized`], other error statuses carry Spotify's own
//! message, and bodies that cannot be decoded into the typed models become
//! [`SpotifyError::Malformed`]. Nothing is retried.
//!
//! ## API Coverage
//!
//! - `GET /artists/{id}`
//! - `GET /artists/{id}/top-tracks`
//! - `GET /artists/{id}/albums`
//! - `GET /artists/{id}/related-artists`
//! - `GET /search` (artists and playlists)
//! - `GET /me`, `GET /me/top/{tracks,artists}`, `GET /me/player/recently-played`
//! - `POST /api/token` (accounts service)

use std::future::Future;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

pub mod albums;
pub mod artists;
pub mod auth;
pub mod me;
pub mod models;
pub mod search;

use models::{AlbumQuery, Artist, Paging, SimplifiedAlbum, Track};

/// Errors raised while talking to the Spotify Web API.
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// The access token was rejected by Spotify.
    #[error("the access token is invalid or expired")]
    Unauthorized,

    /// Spotify answered with a non-success status.
    #[error("{message} (status {status})")]
    Status { status: StatusCode, message: String },

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("unexpected response from Spotify: {0}")]
    Malformed(String),

    #[error("cannot build request URL for {0}")]
    InvalidUrl(String),
}

/// Read-only catalog operations used by the analytics report.
///
/// [`SpotifyClient`] is the production implementation; tests provide
/// in-memory fakes.
pub trait Catalog {
    fn artist(&self, artist_id: &str) -> impl Future<Output = Result<Artist, SpotifyError>> + Send;

    fn top_tracks(
        &self,
        artist_id: &str,
        market: &str,
    ) -> impl Future<Output = Result<Vec<Track>, SpotifyError>> + Send;

    fn albums(
        &self,
        artist_id: &str,
        query: &AlbumQuery,
    ) -> impl Future<Output = Result<Paging<SimplifiedAlbum>, SpotifyError>> + Send;

    fn related_artists(
        &self,
        artist_id: &str,
    ) -> impl Future<Output = Result<Vec<Artist>, SpotifyError>> + Send;
}

/// An authenticated handle on the Spotify Web API.
///
/// Created per request by [`auth::TokenGateway::wrap_token`]. Construction
/// does no network I/O; an invalid token only surfaces on the first call.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: Url,
    token: String,
}

impl SpotifyClient {
    pub fn new(http: Client, api_url: Url, token: impl Into<String>) -> Self {
        Self {
            http,
            api_url,
            token: token.into(),
        }
    }

    /// Appends percent-encoded path segments to the API base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, SpotifyError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| SpotifyError::InvalidUrl(self.api_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issues an authenticated GET and decodes the JSON body into `T`.
    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, SpotifyError> {
        let url = self.endpoint(segments)?;
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if status == StatusCode::UNAUTHORIZED {
            return Err(SpotifyError::Unauthorized);
        }
        if !status.is_success() {
            return Err(SpotifyError::Status {
                status,
                message: error_message(&body, status),
            });
        }

        serde_json::from_slice(&body).map_err(|e| SpotifyError::Malformed(e.to_string()))
    }
}

/// Extracts Spotify's `{"error": {"message": ...}}` text, falling back to the
/// status reason.
fn error_message(body: &[u8], status: StatusCode) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|json| match &json["error"] {
            Value::String(s) => Some(s.clone()),
            other => other["message"].as_str().map(str::to_string),
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        })
}

impl Catalog for SpotifyClient {
    async fn artist(&self, artist_id: &str) -> Result<Artist, SpotifyError> {
        artists::get_artist(self, artist_id).await
    }

    async fn top_tracks(&self, artist_id: &str, market: &str) -> Result<Vec<Track>, SpotifyError> {
        artists::get_top_tracks(self, artist_id, market).await
    }

    async fn albums(
        &self,
        artist_id: &str,
        query: &AlbumQuery,
    ) -> Result<Paging<SimplifiedAlbum>, SpotifyError> {
        albums::get_artist_albums(self, artist_id, query).await
    }

    async fn related_artists(&self, artist_id: &str) -> Result<Vec<Artist>, SpotifyError> {
        artists::get_related_artists(self, artist_id).await
    }
}
