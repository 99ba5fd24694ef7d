//! Configuration management for the Spotify broadcast backend.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Spotify credentials and endpoint
//! URLs are gathered once at startup into a [`SpotifyConfig`] value that is
//! handed to the token lifecycle manager; server-level settings keep simple
//! accessor functions.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (endpoint URLs and scope)

use dotenv;
use std::{env, path::PathBuf};

/// Scopes requested during authorization when `SPOTIFY_API_AUTH_SCOPE` is
/// not set. Covers everything the read endpoints need.
pub const DEFAULT_SCOPE: &str =
    "user-read-playback-state user-read-recently-played user-top-read user-read-email user-read-private";

const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Looks for the file under the platform-specific local data directory:
/// - Linux: `~/.local/share/spotcast/.env`
/// - macOS: `~/Library/Application Support/spotcast/.env`
/// - Windows: `%LOCALAPPDATA%/spotcast/.env`
///
/// A missing file is not an error; deployments may configure the process
/// environment directly.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotcast/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Spotify credentials and endpoint URLs, read once at startup and passed
/// into the token lifecycle manager as an immutable value.
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scope: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
}

impl SpotifyConfig {
    /// Builds the configuration from the process environment.
    ///
    /// `SPOTIFY_API_AUTH_CLIENT_ID`, `SPOTIFY_API_AUTH_CLIENT_SECRET` and
    /// `SPOTIFY_API_REDIRECT_URI` are required. Scope and the authorize,
    /// token and Web API base URLs fall back to the standard Spotify values
    /// when their variables are unset.
    ///
    /// # Errors
    ///
    /// Returns a message naming the missing variable when a required value
    /// is absent.
    pub fn from_env() -> Result<Self, String> {
        Ok(SpotifyConfig {
            client_id: require("SPOTIFY_API_AUTH_CLIENT_ID")?,
            client_secret: require("SPOTIFY_API_AUTH_CLIENT_SECRET")?,
            redirect_uri: require("SPOTIFY_API_REDIRECT_URI")?,
            scope: env::var("SPOTIFY_API_AUTH_SCOPE").unwrap_or_else(|_| DEFAULT_SCOPE.to_string()),
            auth_url: env::var("SPOTIFY_API_AUTH_URL")
                .unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string()),
            token_url: env::var("SPOTIFY_API_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
            api_url: env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        })
    }
}

fn require(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("{} must be set", name))
}

/// Returns the address the HTTP server binds to.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8080"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the root directory of the token store.
///
/// `SPOTCAST_STORE_DIR` overrides the default, which is `spotcast/cache`
/// under the platform-specific local data directory.
pub fn store_dir() -> PathBuf {
    if let Ok(dir) = env::var("SPOTCAST_STORE_DIR") {
        return PathBuf::from(dir);
    }

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotcast/cache");
    path
}
