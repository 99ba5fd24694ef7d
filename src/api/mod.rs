//! # API Module
//!
//! This module provides the HTTP endpoints of the Spotify broadcast
//! backend: the OAuth entry points that establish the stored token, the
//! read-only playback and profile endpoints that consume it, and a health
//! check for monitoring.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`index`] - Redirects the browser to Spotify's authorization page.
//! - [`callback`] - Receives the authorization code from Spotify,
//!   exchanges it for a token record and persists it.
//!
//! ### Playback
//!
//! - [`currently_playing`] - Minimal artist/track view of the playing song.
//! - [`currently_playing_verbose`] - Extended view with album, artwork,
//!   progress and canonical Spotify links.
//! - [`recently_played`] - Play history with a bounded page size.
//!
//! ### User
//!
//! - [`user_info`] - Profile of the authorized user.
//! - [`top_five`] - Top five tracks, passed through field-for-field.
//! - [`top_five_artists`] - Top five artists, mapped to a compact DTO.
//!
//! ### Monitoring
//!
//! - [`health`] - Application status and version for monitoring systems.
//! - [`docs`] - Static endpoint overview, the post-authorization landing
//!   page.
//!
//! ## Architecture
//!
//! The module is built on the [Axum](https://docs.rs/axum) web framework.
//! Handlers share one `Extension<Arc<TokenManager>>`; every data endpoint
//! asks the manager for a valid access token first and never talks to
//! Spotify when that fails. Response shaping lives in pure functions next
//! to the handlers so it can be unit tested without a server.
//!
//! ## Error Responses
//!
//! Failures are reported as `{"detail": "..."}` bodies: `400` for a
//! missing authorization code, `401` while no token record exists, `502`
//! for upstream exchange or query failures, `500` for configuration or
//! store problems. A playback query with nothing playing answers `204 No
//! Content` rather than an error.

mod auth;
mod docs;
mod error;
mod health;
mod playback;
mod user;

pub use auth::callback;
pub use auth::index;
pub use docs::docs;
pub use error::upstream_error;
pub use health::health;
pub use playback::currently_playing;
pub use playback::currently_playing_verbose;
pub use playback::recently_played;
pub use playback::recently_played_tracks;
pub use playback::track_info;
pub use playback::track_verbose_info;
pub use user::artist_info;
pub use user::top_five;
pub use user::top_five_artists;
pub use user::user_info;
pub use user::user_profile;
