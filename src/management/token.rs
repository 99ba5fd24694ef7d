use std::{fmt, sync::Arc};

use chrono::Utc;
use tokio::sync::Mutex;

use crate::{
    config::SpotifyConfig,
    management::store::{TOKEN_STORE_KEY, TokenStore},
    spotify,
    types::{Token, TokenResponse},
};

/// Failure classification of the token lifecycle. Everything the manager
/// can go wrong with maps to exactly one of these kinds; nothing leaks
/// through as an unclassified error.
#[derive(Debug)]
pub enum TokenError {
    Configuration(String),
    MissingCode,
    Exchange(String),
    NoToken,
    Store(String),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::Configuration(detail) => write!(f, "Failed to create auth URL: {}", detail),
            TokenError::MissingCode => write!(f, "Missing code"),
            TokenError::Exchange(detail) => write!(f, "Token exchange failed: {}", detail),
            TokenError::NoToken => write!(f, "Spotify token not found"),
            TokenError::Store(detail) => write!(f, "Token store error: {}", detail),
        }
    }
}

/// Owner of the single token record and the only component that reads or
/// writes it. Runs the authorization-code exchange, decides when the record
/// is expired and refreshes it, so no caller ever handles an invalid
/// credential.
pub struct TokenManager {
    config: SpotifyConfig,
    store: Arc<dyn TokenStore>,
    refresh_lock: Mutex<()>,
}

impl TokenManager {
    pub fn new(config: SpotifyConfig, store: Arc<dyn TokenStore>) -> Self {
        TokenManager {
            config,
            store,
            refresh_lock: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &SpotifyConfig {
        &self.config
    }

    /// Builds the authorization URL the browser is redirected to. Has no
    /// side effects and can be called any number of times.
    pub fn authorize_url(&self) -> Result<String, TokenError> {
        if self.config.client_id.is_empty() || self.config.redirect_uri.is_empty() {
            return Err(TokenError::Configuration(
                "client id and redirect URI must be configured".to_string(),
            ));
        }

        Ok(format!(
            "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}",
            auth_url = &self.config.auth_url,
            client_id = &self.config.client_id,
            redirect_uri = &self.config.redirect_uri,
            scope = &self.config.scope,
        ))
    }

    /// Exchanges an authorization code for a token record and persists it,
    /// overwriting any existing record. This is the single write path that
    /// creates a record; a failed exchange leaves prior state untouched.
    pub async fn complete_authorization(&self, code: &str) -> Result<(), TokenError> {
        if code.is_empty() {
            return Err(TokenError::MissingCode);
        }

        let response = spotify::auth::exchange_code(&self.config, code)
            .await
            .map_err(TokenError::Exchange)?;
        let token = issue_token(response, now());
        self.persist(&token).await
    }

    /// Returns an access token that is valid at the time of the call.
    ///
    /// Reads the stored record and returns its access token unchanged while
    /// the expiry lies in the future. An expired record is refreshed against
    /// the token endpoint and the store is updated before the new access
    /// token is returned; a failed refresh reports
    /// [`TokenError::Exchange`] and leaves the record as it was, so the
    /// caller can surface "re-authorization required".
    ///
    /// The read-refresh-write sequence runs under an in-process lock.
    /// Requests that queued behind a concurrent refresh re-read the record
    /// and pick up the freshly written token instead of refreshing again.
    pub async fn get_valid_token(&self) -> Result<String, TokenError> {
        let token = self.load().await?.ok_or(TokenError::NoToken)?;
        if !is_expired(&token, now()) {
            return Ok(token.access_token);
        }

        let _guard = self.refresh_lock.lock().await;
        let token = self.load().await?.ok_or(TokenError::NoToken)?;
        if !is_expired(&token, now()) {
            return Ok(token.access_token);
        }

        let response = spotify::auth::refresh_access_token(&self.config, &token.refresh_token)
            .await
            .map_err(TokenError::Exchange)?;
        let refreshed = apply_refresh(token, response, now());
        self.persist(&refreshed).await?;
        Ok(refreshed.access_token)
    }

    async fn load(&self) -> Result<Option<Token>, TokenError> {
        let raw = self
            .store
            .get(TOKEN_STORE_KEY)
            .await
            .map_err(|e| TokenError::Store(e.to_string()))?;
        let Some(raw) = raw else {
            return Ok(None);
        };

        let token = serde_json::from_str(&raw).map_err(|e| TokenError::Store(e.to_string()))?;
        Ok(Some(token))
    }

    async fn persist(&self, token: &Token) -> Result<(), TokenError> {
        let json =
            serde_json::to_string_pretty(token).map_err(|e| TokenError::Store(e.to_string()))?;
        self.store
            .set(TOKEN_STORE_KEY, &json)
            .await
            .map_err(|e| TokenError::Store(e.to_string()))
    }
}

fn now() -> u64 {
    Utc::now().timestamp() as u64
}

// Exact comparison, no grace window.
fn is_expired(token: &Token, now: u64) -> bool {
    now >= token.expires_at
}

fn issue_token(response: TokenResponse, now: u64) -> Token {
    Token {
        access_token: response.access_token,
        refresh_token: response.refresh_token.unwrap_or_default(),
        scope: response.scope.unwrap_or_default(),
        token_type: response.token_type.unwrap_or_else(|| "Bearer".to_string()),
        expires_at: now + response.expires_in,
    }
}

// Refresh responses may omit the refresh token, scope and token type; the
// values of the previous record are retained in that case.
fn apply_refresh(previous: Token, response: TokenResponse, now: u64) -> Token {
    Token {
        access_token: response.access_token,
        refresh_token: response.refresh_token.unwrap_or(previous.refresh_token),
        scope: response.scope.unwrap_or(previous.scope),
        token_type: response.token_type.unwrap_or(previous.token_type),
        expires_at: now + response.expires_in,
    }
}
