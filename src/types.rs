//! Response payloads returned by the HTTP API.
//!
//! Each type is a narrow projection of an upstream Spotify object. JSON keys
//! follow the dashboard frontend's expectations (`followers`, `image`,
//! `album`, `type`), which is why several fields are renamed.

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::spotify::models::{
    Artist, ExternalUrls, Image, PlayHistory, Playlist, SimplifiedAlbum, Track, UserProfile,
    first_image_url,
};

/// Result of a successful authorization-code exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub scope: String,
    pub expires_in: u64,
    pub refresh_token: Option<String>,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "followers")]
    pub follower_count: u64,
    pub popularity: u32,
    pub genres: Vec<String>,
    #[serde(rename = "image")]
    pub image_url: Option<String>,
}

impl From<&Artist> for ArtistSummary {
    fn from(artist: &Artist) -> Self {
        Self {
            id: artist.id.clone(),
            name: artist.name.clone(),
            follower_count: artist.followers.total,
            popularity: artist.popularity,
            genres: artist.genres.clone(),
            image_url: first_image_url(&artist.images),
        }
    }
}

/// Full artist overview, including every image and external link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistDetail {
    pub id: String,
    pub name: String,
    pub followers: u64,
    pub popularity: u32,
    pub genres: Vec<String>,
    pub images: Vec<Image>,
    pub external_urls: ExternalUrls,
}

impl From<Artist> for ArtistDetail {
    fn from(artist: Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
            followers: artist.followers.total,
            popularity: artist.popularity,
            genres: artist.genres,
            images: artist.images,
            external_urls: artist.external_urls,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "album")]
    pub album_name: String,
    pub popularity: u32,
    pub duration_ms: u64,
    pub preview_url: Option<String>,
    #[serde(rename = "image")]
    pub image_url: Option<String>,
    pub release_date: Option<String>,
    pub external_urls: ExternalUrls,
}

impl From<Track> for TrackSummary {
    fn from(track: Track) -> Self {
        Self {
            image_url: first_image_url(&track.album.images),
            id: track.id,
            name: track.name,
            album_name: track.album.name,
            popularity: track.popularity,
            duration_ms: track.duration_ms,
            preview_url: track.preview_url,
            release_date: track.album.release_date,
            external_urls: track.external_urls,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub album_type: String,
    pub release_date: Option<String>,
    pub total_tracks: Option<u32>,
    #[serde(rename = "image")]
    pub image_url: Option<String>,
    pub external_urls: ExternalUrls,
}

impl From<SimplifiedAlbum> for AlbumSummary {
    fn from(album: SimplifiedAlbum) -> Self {
        Self {
            image_url: first_image_url(&album.images),
            id: album.id,
            name: album.name,
            album_type: album.album_type,
            release_date: album.release_date,
            total_tracks: album.total_tracks,
            external_urls: album.external_urls,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
    pub owner: Option<String>,
    pub tracks_total: u64,
    pub image: Option<String>,
    pub external_urls: ExternalUrls,
    pub description: String,
}

impl From<Playlist> for PlaylistSummary {
    fn from(playlist: Playlist) -> Self {
        Self {
            image: playlist.images.as_deref().and_then(first_image_url),
            id: playlist.id,
            name: playlist.name,
            owner: playlist.owner.display_name,
            tracks_total: playlist.tracks.total,
            external_urls: playlist.external_urls,
            description: playlist.description.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistSearchResult {
    pub artists: Vec<ArtistSummary>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResult {
    pub tracks: Vec<TrackSummary>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumsResult {
    pub albums: Vec<AlbumSummary>,
    pub total: usize,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistsResult {
    pub playlists: Vec<PlaylistSummary>,
    pub total: usize,
    pub artist_name: String,
}

/// The signed-in user, as shown in the dashboard header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub country: Option<String>,
    pub product: Option<String>,
    pub followers: u64,
    pub image: Option<String>,
    pub external_urls: ExternalUrls,
}

impl From<UserProfile> for UserSummary {
    fn from(user: UserProfile) -> Self {
        Self {
            image: first_image_url(&user.images),
            id: user.id,
            display_name: user.display_name,
            email: user.email,
            country: user.country,
            product: user.product,
            followers: user.followers.total,
            external_urls: user.external_urls,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentTrack {
    pub track: TrackSummary,
    pub played_at: String,
}

impl From<PlayHistory> for RecentTrack {
    fn from(item: PlayHistory) -> Self {
        Self {
            track: TrackSummary::from(item.track),
            played_at: item.played_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentlyPlayedResult {
    pub items: Vec<RecentTrack>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenresResult {
    pub genres: Vec<GenreCount>,
    pub time_range: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub total_albums: usize,
    pub total_singles: usize,
    pub total_releases: usize,
    pub avg_track_popularity: f64,
    pub related_artists_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct TrackPreview {
    pub name: String,
    pub popularity: u32,
    pub album: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct RelatedArtistPreview {
    pub name: String,
    pub followers: u64,
    pub popularity: u32,
}

/// Derived analytics for one artist. Computed fresh on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub artist: ArtistSummary,
    pub metrics: Metrics,
    pub top_tracks_preview: Vec<TrackPreview>,
    pub genre_analysis: Vec<GenreCount>,
    pub related_artists_preview: Vec<RelatedArtistPreview>,
}
