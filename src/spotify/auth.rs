use reqwest::Client;

use crate::{config::SpotifyConfig, types::TokenResponse};

/// Exchanges an authorization code for an access/refresh token pair.
///
/// Completes the OAuth 2.0 authorization-code flow by posting the code
/// received on the callback to Spotify's token endpoint. The client
/// credentials are sent as HTTP Basic authentication, matching the token
/// endpoint's contract for confidential clients.
///
/// # Arguments
///
/// * `config` - Spotify credentials and endpoint URLs
/// * `code` - Authorization code received from the OAuth callback
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(TokenResponse)` - Access token, refresh token and expiry metadata
/// - `Err(String)` - Transport failure, non-success status (with the
///   provider's error body), or a malformed response payload
///
/// # Error Conditions
///
/// Authorization codes are single-use and short-lived; exchanging a code a
/// second time fails at the provider and is reported here, never retried.
///
/// # Example
///
/// ```
/// let response = exchange_code(&config, "AQA...auth_code").await?;
/// println!("Access token: {}", response.access_token);
/// ```
pub async fn exchange_code(config: &SpotifyConfig, code: &str) -> Result<TokenResponse, String> {
    request_token(
        config,
        &[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &config.redirect_uri),
        ],
    )
    .await
}

/// Refreshes an expired access token using a refresh token.
///
/// Exchanges a refresh token for a new access token when the current token
/// has expired, so authenticated access continues without sending the user
/// back through the authorization flow.
///
/// # Arguments
///
/// * `config` - Spotify credentials and endpoint URLs
/// * `refresh_token` - Valid refresh token obtained from a previous exchange
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(TokenResponse)` - Fresh access token and updated expiration;
///   Spotify may or may not rotate the refresh token
/// - `Err(String)` - Transport failure, provider rejection, or a malformed
///   response payload
///
/// # Example
///
/// ```
/// let response = refresh_access_token(&config, "AQC...refresh_token").await?;
/// println!("New token expires in {} seconds", response.expires_in);
/// ```
pub async fn refresh_access_token(
    config: &SpotifyConfig,
    refresh_token: &str,
) -> Result<TokenResponse, String> {
    request_token(
        config,
        &[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ],
    )
    .await
}

async fn request_token(
    config: &SpotifyConfig,
    form: &[(&str, &str)],
) -> Result<TokenResponse, String> {
    let client = Client::new();
    let res = client
        .post(&config.token_url)
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(form)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(format!("token endpoint returned {status}: {body}"));
    }

    res.json::<TokenResponse>().await.map_err(|e| e.to_string())
}
