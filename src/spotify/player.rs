use reqwest::{Client, StatusCode};

use crate::{
    config::SpotifyConfig,
    types::{PlaybackState, RecentlyPlayedPage},
};

/// Retrieves the current playback state of the authenticated user.
///
/// Calls the `/me/player` endpoint. Spotify answers `204 No Content` when
/// there is no active device at all; that case maps to `Ok(None)` rather
/// than an error so callers can report "nothing playing".
///
/// # Arguments
///
/// * `config` - Spotify endpoint configuration
/// * `token` - Valid access token for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Some(PlaybackState))` - Playback state, possibly paused
/// - `Ok(None)` - No active playback session
/// - `Err(reqwest::Error)` - Network error, API error, or malformed payload
pub async fn current_playback(
    config: &SpotifyConfig,
    token: &str,
) -> Result<Option<PlaybackState>, reqwest::Error> {
    let api_url = format!("{uri}/me/player", uri = &config.api_url);

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    if response.status() == StatusCode::NO_CONTENT {
        return Ok(None);
    }

    let state = response.json::<PlaybackState>().await?;
    Ok(Some(state))
}

/// Retrieves the tracks the authenticated user played most recently.
///
/// Calls `/me/player/recently-played` with the given page size. The caller
/// is responsible for keeping `limit` within Spotify's maximum of 50.
///
/// # Returns
///
/// Returns the play history page, newest entries first, or the HTTP error.
pub async fn recently_played(
    config: &SpotifyConfig,
    token: &str,
    limit: u32,
) -> Result<RecentlyPlayedPage, reqwest::Error> {
    let api_url = format!(
        "{uri}/me/player/recently-played?limit={limit}",
        uri = &config.api_url
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<RecentlyPlayedPage>().await
}
