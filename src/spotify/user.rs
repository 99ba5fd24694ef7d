use reqwest::Client;

use crate::{
    config::SpotifyConfig,
    types::{PrivateUser, TopArtistsPage, TopTracksPage},
};

/// Retrieves the profile of the authenticated user.
///
/// Calls the `/me` endpoint. Display name, images and follower counts are
/// all optional on the Spotify side and stay optional in the returned
/// payload.
///
/// # Returns
///
/// Returns the user profile or the HTTP error.
pub async fn me(config: &SpotifyConfig, token: &str) -> Result<PrivateUser, reqwest::Error> {
    let api_url = format!("{uri}/me", uri = &config.api_url);

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<PrivateUser>().await
}

/// Retrieves the user's top tracks for a time range.
///
/// Calls `/me/top/tracks`. The track objects are kept as raw JSON so they
/// can be handed through to clients field-for-field.
///
/// # Arguments
///
/// * `limit` - Page size (1-50)
/// * `time_range` - One of `short_term`, `medium_term`, `long_term`
pub async fn top_tracks(
    config: &SpotifyConfig,
    token: &str,
    limit: u32,
    time_range: &str,
) -> Result<TopTracksPage, reqwest::Error> {
    let api_url = format!(
        "{uri}/me/top/tracks?time_range={time_range}&limit={limit}",
        uri = &config.api_url
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<TopTracksPage>().await
}

/// Retrieves the user's top artists for a time range.
///
/// Calls `/me/top/artists` with the same paging parameters as
/// [`top_tracks`].
pub async fn top_artists(
    config: &SpotifyConfig,
    token: &str,
    limit: u32,
    time_range: &str,
) -> Result<TopArtistsPage, reqwest::Error> {
    let api_url = format!(
        "{uri}/me/top/artists?time_range={time_range}&limit={limit}",
        uri = &config.api_url
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<TopArtistsPage>().await
}
