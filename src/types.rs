use serde::{Deserialize, Serialize};
use serde_json::Value;

// The single persisted token record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub token_type: String,
    pub expires_at: u64,
}

// Raw payload of the accounts token endpoint. Refresh responses may omit
// everything but the access token and its lifetime.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub scope: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaybackState {
    pub device: Option<PlaybackDevice>,
    pub progress_ms: Option<u64>,
    #[serde(default)]
    pub is_playing: bool,
    pub item: Option<PlaybackItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaybackDevice {
    #[serde(default)]
    pub is_private_session: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaybackItem {
    pub id: String,
    pub name: String,
    pub duration_ms: u64,
    pub artists: Vec<TrackArtist>,
    pub album: TrackAlbum,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackAlbum {
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u64>,
    pub width: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrivateUser {
    pub display_name: Option<String>,
    pub uri: String,
    #[serde(default)]
    pub images: Vec<Image>,
    pub followers: Option<Followers>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Followers {
    pub total: u64,
}

// Top tracks stay raw JSON; the endpoint passes them through untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct TopTracksPage {
    pub items: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopArtistsPage {
    pub items: Vec<FullArtist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FullArtist {
    pub id: String,
    pub name: String,
    pub uri: String,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub images: Vec<Image>,
    pub followers: Option<Followers>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecentlyPlayedPage {
    pub items: Vec<PlayHistory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayHistory {
    pub track: PlaybackItem,
    pub played_at: String,
}

// Response DTOs of the public endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct TrackInfo {
    pub artist: String,
    pub track: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackVerboseInfo {
    pub artist: String,
    pub track: String,
    pub album: String,
    pub image_url: String,
    pub progress_ms: u64,
    pub duration_ms: u64,
    pub is_playing: bool,
    pub track_id: String,
    pub spotify_url: String,
    pub spotify_uri: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub display_name: Option<String>,
    pub uri: String,
    pub image: Option<String>,
    pub height: Option<u64>,
    pub width: Option<u64>,
    pub followers: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopTracks {
    pub top_tracks: Vec<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtistInfo {
    pub id: String,
    pub name: String,
    pub uri: String,
    pub spotify_url: Option<String>,
    pub image_url: Option<String>,
    pub followers: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentlyPlayedTrack {
    pub id: String,
    pub name: String,
    pub artists: Vec<String>,
    pub album: String,
    pub image_url: Option<String>,
    pub spotify_url: Option<String>,
    pub played_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
