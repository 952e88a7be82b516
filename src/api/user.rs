use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;

use crate::{
    analytics::{self, GENRE_TABLE_SIZE},
    error::ApiError,
    spotify::{me, models::TimeRange},
    types::{
        ArtistSearchResult, ArtistSummary, GenresResult, RecentTrack, RecentlyPlayedResult,
        TopTracksResult, TrackSummary, UserSummary,
    },
};

use super::{AccessToken, AppState, artist::parse_limit};

/// Number of top artists sampled for the genre table.
const GENRE_ARTIST_SAMPLE: u32 = 50;

#[derive(Debug, Deserialize)]
pub struct TopItemsParams {
    time_range: Option<String>,
    limit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TimeRangeParams {
    time_range: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecentParams {
    limit: Option<String>,
}

fn parse_time_range(raw: Option<&str>) -> Result<TimeRange, ApiError> {
    match raw.map(str::trim).filter(|r| !r.is_empty()) {
        None => Ok(TimeRange::default()),
        Some(r) => r.parse().map_err(ApiError::BadRequest),
    }
}

/// `GET /api/user/profile?token`
pub async fn user_profile(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
) -> Result<Json<UserSummary>, ApiError> {
    let client = state.gateway.wrap_token(token);
    let user = me::get_current_user(&client)
        .await
        .map_err(|e| ApiError::upstream("Error fetching user profile", e))?;

    Ok(Json(UserSummary::from(user)))
}

/// `GET /api/stats/top-tracks?token&time_range&limit`
pub async fn user_top_tracks(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
    Query(params): Query<TopItemsParams>,
) -> Result<Json<TopTracksResult>, ApiError> {
    let time_range = parse_time_range(params.time_range.as_deref())?;
    let limit = parse_limit(params.limit.as_deref(), 20)?;

    let client = state.gateway.wrap_token(token);
    let tracks = me::get_user_top_tracks(&client, time_range, limit)
        .await
        .map_err(|e| ApiError::upstream("Error fetching top tracks", e))?;

    let tracks: Vec<TrackSummary> = tracks.into_iter().map(TrackSummary::from).collect();
    Ok(Json(TopTracksResult {
        total: tracks.len(),
        tracks,
    }))
}

/// `GET /api/stats/top-artists?token&time_range&limit`
pub async fn user_top_artists(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
    Query(params): Query<TopItemsParams>,
) -> Result<Json<ArtistSearchResult>, ApiError> {
    let time_range = parse_time_range(params.time_range.as_deref())?;
    let limit = parse_limit(params.limit.as_deref(), 20)?;

    let client = state.gateway.wrap_token(token);
    let found = me::get_user_top_artists(&client, time_range, limit)
        .await
        .map_err(|e| ApiError::upstream("Error fetching top artists", e))?;

    let artists: Vec<ArtistSummary> = found.iter().map(ArtistSummary::from).collect();
    Ok(Json(ArtistSearchResult {
        total: artists.len(),
        artists,
    }))
}

/// `GET /api/stats/genres?token&time_range`
///
/// Genre frequency over the user's top artists.
pub async fn user_genres(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
    Query(params): Query<TimeRangeParams>,
) -> Result<Json<GenresResult>, ApiError> {
    let time_range = parse_time_range(params.time_range.as_deref())?;

    let client = state.gateway.wrap_token(token);
    let artists = me::get_user_top_artists(&client, time_range, GENRE_ARTIST_SAMPLE)
        .await
        .map_err(|e| ApiError::upstream("Error fetching top genres", e))?;

    let genres = analytics::genre_frequency(
        artists.iter().flat_map(|a| a.genres.iter().map(String::as_str)),
        GENRE_TABLE_SIZE,
    );
    Ok(Json(GenresResult {
        genres,
        time_range: time_range.as_str().to_string(),
    }))
}

/// `GET /api/stats/recently-played?token&limit`
pub async fn recently_played(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
    Query(params): Query<RecentParams>,
) -> Result<Json<RecentlyPlayedResult>, ApiError> {
    let limit = parse_limit(params.limit.as_deref(), 20)?;

    let client = state.gateway.wrap_token(token);
    let history = me::get_recently_played(&client, limit)
        .await
        .map_err(|e| ApiError::upstream("Error fetching recently played tracks", e))?;

    let items: Vec<RecentTrack> = history.into_iter().map(RecentTrack::from).collect();
    Ok(Json(RecentlyPlayedResult {
        total: items.len(),
        items,
    }))
}
