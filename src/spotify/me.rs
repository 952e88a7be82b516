use super::{
    SpotifyClient, SpotifyError,
    models::{Artist, Paging, PlayHistory, TimeRange, Track, UserProfile},
};

/// Retrieves the profile of the user who owns the access token.
///
/// `email` is only present when the token carries `user-read-email`, and
/// `country`/`product` need `user-read-private`.
pub async fn get_current_user(client: &SpotifyClient) -> Result<UserProfile, SpotifyError> {
    client.get(&["me"], &[]).await
}

/// Retrieves the user's most listened tracks over `time_range`.
///
/// Requires the `user-top-read` scope.
pub async fn get_user_top_tracks(
    client: &SpotifyClient,
    time_range: TimeRange,
    limit: u32,
) -> Result<Vec<Track>, SpotifyError> {
    let page: Paging<Track> = client
        .get(&["me", "top", "tracks"], &top_params(time_range, limit))
        .await?;

    Ok(page.items)
}

/// Retrieves the user's most listened artists over `time_range`.
///
/// Requires the `user-top-read` scope.
pub async fn get_user_top_artists(
    client: &SpotifyClient,
    time_range: TimeRange,
    limit: u32,
) -> Result<Vec<Artist>, SpotifyError> {
    let page: Paging<Artist> = client
        .get(&["me", "top", "artists"], &top_params(time_range, limit))
        .await?;

    Ok(page.items)
}

/// Retrieves the most recently played tracks, newest first.
///
/// Requires the `user-read-recently-played` scope. Spotify caps `limit` at 50.
pub async fn get_recently_played(
    client: &SpotifyClient,
    limit: u32,
) -> Result<Vec<PlayHistory>, SpotifyError> {
    let page: Paging<PlayHistory> = client
        .get(
            &["me", "player", "recently-played"],
            &[("limit", limit.to_string())],
        )
        .await?;

    Ok(page.items)
}

fn top_params(time_range: TimeRange, limit: u32) -> Vec<(&'static str, String)> {
    vec![
        ("time_range", time_range.as_str().to_string()),
        ("limit", limit.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_range_parses_known_values() {
        assert_eq!("short_term".parse::<TimeRange>(), Ok(TimeRange::ShortTerm));
        assert_eq!("medium_term".parse::<TimeRange>(), Ok(TimeRange::MediumTerm));
        assert_eq!("long_term".parse::<TimeRange>(), Ok(TimeRange::LongTerm));
        assert_eq!(TimeRange::default(), TimeRange::MediumTerm);
    }

    #[test]
    fn time_range_rejects_other_values() {
        assert!("forever".parse::<TimeRange>().is_err());
        assert!("".parse::<TimeRange>().is_err());
        assert!("SHORT_TERM".parse::<TimeRange>().is_err());
    }

    #[test]
    fn top_params_use_spotify_names() {
        let params = top_params(TimeRange::LongTerm, 7);
        assert_eq!(
            params,
            vec![
                ("time_range", "long_term".to_string()),
                ("limit", "7".to_string())
            ]
        );
    }
}
