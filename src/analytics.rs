//! Analytics aggregation for a single artist.
//!
//! [`build_report`] combines four catalog calls (profile, top tracks,
//! discography, related artists) into an [`AnalyticsReport`]. Only the
//! related-artists call may fail without failing the report.

use std::collections::HashMap;

use crate::{
    spotify::{
        Catalog, SpotifyError,
        models::{AlbumQuery, AlbumType, Artist, SimplifiedAlbum, Track},
    },
    types::{
        AnalyticsReport, ArtistSummary, GenreCount, Metrics, RelatedArtistPreview, TrackPreview,
    },
    warning,
};

pub const DEFAULT_MARKET: &str = "US";
pub const ALBUM_FETCH_LIMIT: u32 = 50;
pub const GENRE_SAMPLE_SIZE: usize = 10;
pub const GENRE_TABLE_SIZE: usize = 10;
pub const PREVIEW_SIZE: usize = 5;

/// Builds the analytics report for `artist_id`.
///
/// The four upstream reads are independent and run concurrently.
///
/// # Errors
///
/// Any failure of the profile, top-tracks or albums call is returned as is.
/// A related-artists failure is logged and treated as an empty list.
pub async fn build_report<C: Catalog>(
    client: &C,
    artist_id: &str,
) -> Result<AnalyticsReport, SpotifyError> {
    let album_query = AlbumQuery {
        limit: ALBUM_FETCH_LIMIT,
        include_groups: None,
    };

    let (artist, top_tracks, albums, related) = tokio::join!(
        client.artist(artist_id),
        client.top_tracks(artist_id, DEFAULT_MARKET),
        client.albums(artist_id, &album_query),
        client.related_artists(artist_id),
    );

    let artist = artist?;
    let top_tracks = top_tracks?;
    let albums = albums?.items;
    let related = related.unwrap_or_else(|e| {
        warning!("Could not fetch related artists for {}: {}", artist_id, e);
        Vec::new()
    });

    Ok(assemble_report(&artist, &top_tracks, &albums, &related))
}

/// Computes the report from already fetched data.
pub fn assemble_report(
    artist: &Artist,
    top_tracks: &[Track],
    albums: &[SimplifiedAlbum],
    related: &[Artist],
) -> AnalyticsReport {
    let (total_albums, total_singles, total_releases) = release_counts(albums);
    let popularity: Vec<u32> = top_tracks.iter().map(|t| t.popularity).collect();

    AnalyticsReport {
        artist: ArtistSummary::from(artist),
        metrics: Metrics {
            total_albums,
            total_singles,
            total_releases,
            avg_track_popularity: average_popularity(&popularity),
            related_artists_count: related.len(),
        },
        top_tracks_preview: top_tracks
            .iter()
            .take(PREVIEW_SIZE)
            .map(|t| TrackPreview {
                name: t.name.clone(),
                popularity: t.popularity,
                album: t.album.name.clone(),
            })
            .collect(),
        genre_analysis: genre_frequency(
            related
                .iter()
                .take(GENRE_SAMPLE_SIZE)
                .flat_map(|a| a.genres.iter().map(String::as_str)),
            GENRE_TABLE_SIZE,
        ),
        related_artists_preview: related
            .iter()
            .take(PREVIEW_SIZE)
            .map(|a| RelatedArtistPreview {
                name: a.name.clone(),
                followers: a.followers.total,
                popularity: a.popularity,
            })
            .collect(),
    }
}

/// Returns `(albums, singles, all releases)`.
pub fn release_counts(albums: &[SimplifiedAlbum]) -> (usize, usize, usize) {
    let count = |kind: AlbumType| albums.iter().filter(|a| a.kind() == kind).count();
    (count(AlbumType::Album), count(AlbumType::Single), albums.len())
}

/// Mean popularity rounded to one decimal place, `0.0` for no tracks.
///
/// Ties round to even, so a mean of `60.25` yields `60.2`.
pub fn average_popularity(values: &[u32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let sum: u64 = values.iter().map(|&v| u64::from(v)).sum();
    let mean = sum as f64 / values.len() as f64;
    (mean * 10.0).round_ties_even() / 10.0
}

/// Counts genre occurrences and keeps the `limit` most frequent.
///
/// Sorted by descending count; equal counts keep first-encountered order.
pub fn genre_frequency<'a>(genres: impl IntoIterator<Item = &'a str>, limit: usize) -> Vec<GenreCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut table: Vec<GenreCount> = Vec::new();

    for genre in genres {
        match index.get(genre) {
            Some(&i) => table[i].count += 1,
            None => {
                index.insert(genre, table.len());
                table.push(GenreCount {
                    genre: genre.to_string(),
                    count: 1,
                });
            }
        }
    }

    // stable sort
    table.sort_by(|a, b| b.count.cmp(&a.count));
    table.truncate(limit);
    table
}
