use serde_json::Value;

use crate::warning;

use super::{
    SpotifyClient, SpotifyError,
    models::{Artist, RelatedArtistsResponse, TopTracksResponse, Track},
};

/// Retrieves the full profile of a single artist.
///
/// # Arguments
///
/// * `client` - Authenticated client for the current request
/// * `artist_id` - Spotify ID of the artist
///
/// # Errors
///
/// - [`SpotifyError::Status`] with status 404 or 400 for unknown or malformed ids
/// - [`SpotifyError::Unauthorized`] when the token is rejected
/// - [`SpotifyError::Malformed`] when `id` or `name` is missing from the body
pub async fn get_artist(client: &SpotifyClient, artist_id: &str) -> Result<Artist, SpotifyError> {
    client.get(&["artists", artist_id], &[]).await
}

/// Retrieves the artist's most popular tracks in the given market.
///
/// Uses Spotify's `/artists/{id}/top-tracks` endpoint. The `market` is an
/// ISO 3166-1 alpha-2 country code; Spotify returns up to 10 tracks.
pub async fn get_top_tracks(
    client: &SpotifyClient,
    artist_id: &str,
    market: &str,
) -> Result<Vec<Track>, SpotifyError> {
    let res: TopTracksResponse = client
        .get(
            &["artists", artist_id, "top-tracks"],
            &[("market", market.to_string())],
        )
        .await?;

    Ok(res.tracks)
}

/// Retrieves artists similar to the given artist.
///
/// Items that cannot be decoded are skipped individually so that one bad
/// entry does not discard the whole list. The endpoint itself may still fail,
/// in which case the error is propagated.
pub async fn get_related_artists(
    client: &SpotifyClient,
    artist_id: &str,
) -> Result<Vec<Artist>, SpotifyError> {
    let res: RelatedArtistsResponse = client
        .get(&["artists", artist_id, "related-artists"], &[])
        .await?;

    Ok(decode_related(res.artists))
}

pub(crate) fn decode_related(items: Vec<Value>) -> Vec<Artist> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Artist>(item) {
            Ok(artist) => Some(artist),
            Err(e) => {
                warning!("Skipping related artist entry: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_related_skips_broken_entries() {
        let items = vec![
            json!({"id": "a", "name": "First", "genres": ["rock"]}),
            json!({"name": "No id"}),
            json!({"id": "c", "name": "Third", "followers": {"total": 7}, "popularity": 40}),
        ];

        let artists = decode_related(items);

        assert_eq!(artists.len(), 2);
        assert_eq!(artists[0].followers.total, 0);
        assert_eq!(artists[1].followers.total, 7);
        assert_eq!(artists[1].popularity, 40);
    }
}
