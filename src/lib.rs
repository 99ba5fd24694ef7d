//! Spotify Broadcast Backend Library
//!
//! This library provides the building blocks of a small backend service that
//! authorizes against the Spotify Web API once and then re-exposes a handful
//! of read-only endpoints (currently playing track, user profile, top tracks
//! and artists, recently played) over HTTP.
//!
//! # Modules
//!
//! - `api` - HTTP handlers and response shaping for the public endpoints
//! - `config` - Configuration management and environment variables
//! - `management` - Token lifecycle and token store abstraction
//! - `server` - HTTP server wiring the public routes
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use spotcast::{config, management::{FileTokenStore, TokenManager}, server};
//!
//! #[tokio::main]
//! async fn main() {
//!     config::load_env().await.unwrap();
//!     let spotify = config::SpotifyConfig::from_env().unwrap();
//!     let store = Arc::new(FileTokenStore::new(config::store_dir()));
//!     let manager = Arc::new(TokenManager::new(spotify, store));
//!     server::start_api_server(manager).await;
//! }
//! ```

pub mod api;
pub mod config;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Authorization complete; token stored");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Reserved for unrecoverable
/// startup failures; request handling paths report errors through HTTP
/// responses instead.
///
/// # Example
///
/// ```
/// error!("Cannot load environment. Err: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// potential issues that don't require program termination.
///
/// # Example
///
/// ```
/// warning!("Token exchange failed: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
