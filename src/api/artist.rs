use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;

use crate::{
    analytics::{self, DEFAULT_MARKET},
    error::ApiError,
    spotify::{albums, artists, models::AlbumQuery, search},
    types::{
        AlbumSummary, AlbumsResult, AnalyticsReport, ArtistDetail, ArtistSearchResult,
        ArtistSummary, PlaylistSummary, PlaylistsResult, TopTracksResult, TrackSummary,
    },
};

use super::{AccessToken, AppState};

const MAX_LIMIT: u32 = 50;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
    limit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TopTracksParams {
    market: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AlbumsParams {
    limit: Option<String>,
    include_groups: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LimitParams {
    limit: Option<String>,
}

/// Parses an optional `limit` parameter, enforcing `1..=50`.
pub(super) fn parse_limit(raw: Option<&str>, default: u32) -> Result<u32, ApiError> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    match raw.trim().parse::<u32>() {
        Ok(n) if (1..=MAX_LIMIT).contains(&n) => Ok(n),
        _ => Err(ApiError::BadRequest(format!(
            "limit must be an integer between 1 and {MAX_LIMIT}, got '{raw}'"
        ))),
    }
}

/// `GET /api/artist/search?token&q&limit`
pub async fn search_artists(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
    Query(params): Query<SearchParams>,
) -> Result<Json<ArtistSearchResult>, ApiError> {
    let q = params
        .q
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Query parameter 'q' is required".to_string()))?;
    let limit = parse_limit(params.limit.as_deref(), 10)?;

    let client = state.gateway.wrap_token(token);
    let found = search::search_artists(&client, &q, limit)
        .await
        .map_err(|e| ApiError::upstream("Error searching artists", e))?;

    let artists: Vec<ArtistSummary> = found.iter().map(ArtistSummary::from).collect();
    Ok(Json(ArtistSearchResult {
        total: artists.len(),
        artists,
    }))
}

/// `GET /api/artist/{id}/overview?token`
pub async fn artist_overview(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
    AccessToken(token): AccessToken,
) -> Result<Json<ArtistDetail>, ApiError> {
    let client = state.gateway.wrap_token(token);
    let artist = artists::get_artist(&client, &artist_id)
        .await
        .map_err(|e| ApiError::upstream("Error fetching artist", e))?;

    Ok(Json(ArtistDetail::from(artist)))
}

/// `GET /api/artist/{id}/top-tracks?token&market`
pub async fn artist_top_tracks(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
    AccessToken(token): AccessToken,
    Query(params): Query<TopTracksParams>,
) -> Result<Json<TopTracksResult>, ApiError> {
    let market = params
        .market
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MARKET.to_string());

    let client = state.gateway.wrap_token(token);
    let tracks = artists::get_top_tracks(&client, &artist_id, &market)
        .await
        .map_err(|e| ApiError::upstream("Error fetching top tracks", e))?;

    let tracks: Vec<TrackSummary> = tracks.into_iter().map(TrackSummary::from).collect();
    Ok(Json(TopTracksResult {
        total: tracks.len(),
        tracks,
    }))
}

/// `GET /api/artist/{id}/albums?token&limit&include_groups`
pub async fn artist_albums(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
    AccessToken(token): AccessToken,
    Query(params): Query<AlbumsParams>,
) -> Result<Json<AlbumsResult>, ApiError> {
    let query = AlbumQuery {
        limit: parse_limit(params.limit.as_deref(), 20)?,
        include_groups: Some(
            params
                .include_groups
                .filter(|g| !g.trim().is_empty())
                .unwrap_or_else(|| "album,single".to_string()),
        ),
    };

    let client = state.gateway.wrap_token(token);
    let page = albums::get_artist_albums(&client, &artist_id, &query)
        .await
        .map_err(|e| ApiError::upstream("Error fetching albums", e))?;

    let albums: Vec<AlbumSummary> = page.items.into_iter().map(AlbumSummary::from).collect();
    Ok(Json(AlbumsResult {
        total: albums.len(),
        albums,
        next: page.next,
    }))
}

/// `GET /api/artist/{id}/related-artists?token`
pub async fn related_artists(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
    AccessToken(token): AccessToken,
) -> Result<Json<ArtistSearchResult>, ApiError> {
    let client = state.gateway.wrap_token(token);
    let related = artists::get_related_artists(&client, &artist_id)
        .await
        .map_err(|e| ApiError::upstream("Error fetching related artists", e))?;

    let artists: Vec<ArtistSummary> = related.iter().map(ArtistSummary::from).collect();
    Ok(Json(ArtistSearchResult {
        total: artists.len(),
        artists,
    }))
}

/// `GET /api/artist/{id}/playlists?token&limit`
///
/// Spotify has no "playlists containing artist" endpoint, so this searches
/// playlists by the artist's name.
pub async fn artist_playlists(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
    AccessToken(token): AccessToken,
    Query(params): Query<LimitParams>,
) -> Result<Json<PlaylistsResult>, ApiError> {
    let limit = parse_limit(params.limit.as_deref(), 20)?;

    let client = state.gateway.wrap_token(token);
    let artist = artists::get_artist(&client, &artist_id)
        .await
        .map_err(|e| ApiError::upstream("Error searching playlists", e))?;
    let found = search::search_playlists(&client, &artist.name, limit)
        .await
        .map_err(|e| ApiError::upstream("Error searching playlists", e))?;

    let playlists: Vec<PlaylistSummary> = found.into_iter().map(PlaylistSummary::from).collect();
    Ok(Json(PlaylistsResult {
        total: playlists.len(),
        playlists,
        artist_name: artist.name,
    }))
}

/// `GET /api/artist/{id}/analytics?token`
pub async fn artist_analytics(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
    AccessToken(token): AccessToken,
) -> Result<Json<AnalyticsReport>, ApiError> {
    let client = state.gateway.wrap_token(token);
    let report = analytics::build_report(&client, &artist_id)
        .await
        .map_err(|e| ApiError::upstream("Error building analytics", e))?;

    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_when_absent() {
        assert_eq!(parse_limit(None, 20).unwrap(), 20);
    }

    #[test]
    fn limit_accepts_bounds() {
        assert_eq!(parse_limit(Some("1"), 20).unwrap(), 1);
        assert_eq!(parse_limit(Some("50"), 20).unwrap(), 50);
    }

    #[test]
    fn limit_rejects_out_of_range_and_garbage() {
        for raw in ["0", "51", "-3", "ten", ""] {
            assert!(matches!(
                parse_limit(Some(raw), 20),
                Err(ApiError::BadRequest(_))
            ));
        }
    }
}
