use std::sync::Arc;

use axum::{
    Extension,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;

use crate::{
    api::error::upstream_error,
    management::TokenManager,
    spotify,
    types::{
        PlaybackItem, PlaybackState, RecentlyPlayedPage, RecentlyPlayedTrack, TrackInfo,
        TrackVerboseInfo,
    },
};

/// `GET /currently-playing` - minimal view of the playing track. Answers
/// `204 No Content` when nothing is actively playing.
pub async fn currently_playing(Extension(manager): Extension<Arc<TokenManager>>) -> Response {
    let token = match manager.get_valid_token().await {
        Ok(token) => token,
        Err(e) => return e.into_response(),
    };

    match spotify::player::current_playback(manager.config(), &token).await {
        Ok(playback) => match playback.as_ref().and_then(track_info) {
            Some(info) => (StatusCode::OK, Json(info)).into_response(),
            None => StatusCode::NO_CONTENT.into_response(),
        },
        Err(e) => upstream_error(e),
    }
}

/// `GET /currently-playing-verbose` - extended view of the playing track
/// including album, artwork, progress and canonical Spotify links.
pub async fn currently_playing_verbose(
    Extension(manager): Extension<Arc<TokenManager>>,
) -> Response {
    let token = match manager.get_valid_token().await {
        Ok(token) => token,
        Err(e) => return e.into_response(),
    };

    match spotify::player::current_playback(manager.config(), &token).await {
        Ok(playback) => match playback.as_ref().and_then(track_verbose_info) {
            Some(info) => (StatusCode::OK, Json(info)).into_response(),
            None => StatusCode::NO_CONTENT.into_response(),
        },
        Err(e) => upstream_error(e),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecentlyPlayedParams {
    pub limit: Option<u32>,
}

/// `GET /recently-played?limit=` - the user's play history, newest first.
pub async fn recently_played(
    Query(params): Query<RecentlyPlayedParams>,
    Extension(manager): Extension<Arc<TokenManager>>,
) -> Response {
    let limit = params.limit.unwrap_or(5).min(50); // Spotify max

    let token = match manager.get_valid_token().await {
        Ok(token) => token,
        Err(e) => return e.into_response(),
    };

    match spotify::player::recently_played(manager.config(), &token, limit).await {
        Ok(page) => (StatusCode::OK, Json(recently_played_tracks(&page))).into_response(),
        Err(e) => upstream_error(e),
    }
}

/// Shapes the playback state into the minimal DTO. `None` is the "nothing
/// playing" outcome: no item, paused playback, or a private session.
pub fn track_info(playback: &PlaybackState) -> Option<TrackInfo> {
    if is_private_session(playback) || !playback.is_playing {
        return None;
    }
    let item = playback.item.as_ref()?;

    Some(TrackInfo {
        artist: first_artist(item),
        track: item.name.clone(),
    })
}

/// Shapes the playback state into the verbose DTO, with the same "nothing
/// playing" rules as [`track_info`]. The web URL carries the playback
/// position so opening it resumes near the live progress.
pub fn track_verbose_info(playback: &PlaybackState) -> Option<TrackVerboseInfo> {
    if is_private_session(playback) || !playback.is_playing {
        return None;
    }
    let item = playback.item.as_ref()?;

    let progress_ms = playback.progress_ms.unwrap_or(0);
    let position_seconds = progress_ms / 1000;

    Some(TrackVerboseInfo {
        artist: first_artist(item),
        track: item.name.clone(),
        album: item.album.name.clone(),
        image_url: item
            .album
            .images
            .first()
            .map(|image| image.url.clone())
            .unwrap_or_default(),
        progress_ms,
        duration_ms: item.duration_ms,
        is_playing: playback.is_playing,
        track_id: item.id.clone(),
        spotify_url: format!(
            "https://open.spotify.com/track/{id}?t={position_seconds}",
            id = item.id
        ),
        spotify_uri: format!("spotify:track:{id}", id = item.id),
    })
}

/// Maps a play history page to the response DTOs, keeping upstream order.
pub fn recently_played_tracks(page: &RecentlyPlayedPage) -> Vec<RecentlyPlayedTrack> {
    page.items
        .iter()
        .map(|entry| RecentlyPlayedTrack {
            id: entry.track.id.clone(),
            name: entry.track.name.clone(),
            artists: entry
                .track
                .artists
                .iter()
                .map(|artist| artist.name.clone())
                .collect(),
            album: entry.track.album.name.clone(),
            image_url: entry
                .track
                .album
                .images
                .first()
                .map(|image| image.url.clone()),
            spotify_url: entry.track.external_urls.spotify.clone(),
            played_at: entry.played_at.clone(),
        })
        .collect()
}

fn first_artist(item: &PlaybackItem) -> String {
    item.artists
        .first()
        .map(|artist| artist.name.clone())
        .unwrap_or_default()
}

fn is_private_session(playback: &PlaybackState) -> bool {
    playback
        .device
        .as_ref()
        .map(|device| device.is_private_session)
        .unwrap_or(false)
}
