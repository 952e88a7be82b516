use super::{
    SpotifyClient, SpotifyError,
    models::{Artist, ArtistSearchResponse, Playlist, PlaylistSearchResponse},
};

/// Searches the catalog for artists matching `query`.
pub async fn search_artists(
    client: &SpotifyClient,
    query: &str,
    limit: u32,
) -> Result<Vec<Artist>, SpotifyError> {
    let res: ArtistSearchResponse = client
        .get(&["search"], &search_params(query, "artist", limit))
        .await?;

    Ok(res.artists.items)
}

/// Searches for playlists matching `query`.
///
/// Entries Spotify reports as `null` are dropped.
pub async fn search_playlists(
    client: &SpotifyClient,
    query: &str,
    limit: u32,
) -> Result<Vec<Playlist>, SpotifyError> {
    let res: PlaylistSearchResponse = client
        .get(&["search"], &search_params(query, "playlist", limit))
        .await?;

    Ok(res.playlists.items.into_iter().flatten().collect())
}

fn search_params(query: &str, kind: &str, limit: u32) -> Vec<(&'static str, String)> {
    vec![
        ("q", query.to_string()),
        ("type", kind.to_string()),
        ("limit", limit.to_string()),
    ]
}
