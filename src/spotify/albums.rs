use super::{
    SpotifyClient, SpotifyError,
    models::{AlbumQuery, Paging, SimplifiedAlbum},
};

/// Retrieves a page of an artist's discography.
///
/// # Arguments
///
/// * `client` - Authenticated client for the current request
/// * `artist_id` - Spotify ID of the artist
/// * `query` - Page size and optional `include_groups` filter
///
/// # Release Type Filtering
///
/// `include_groups` is a comma-separated list of:
/// - `album` - Full-length studio albums
/// - `single` - Singles and EPs
/// - `appears_on` - Albums the artist appears on but doesn't own
/// - `compilation` - Compilation albums and greatest hits
///
/// When no filter is given Spotify returns every group.
///
/// # Returns
///
/// The raw page, including the `next` URL so callers can expose pagination.
pub async fn get_artist_albums(
    client: &SpotifyClient,
    artist_id: &str,
    query: &AlbumQuery,
) -> Result<Paging<SimplifiedAlbum>, SpotifyError> {
    let mut params = vec![("limit", query.limit.to_string())];
    if let Some(groups) = &query.include_groups {
        params.push(("include_groups", groups.clone()));
    }

    client.get(&["artists", artist_id, "albums"], &params).await
}
