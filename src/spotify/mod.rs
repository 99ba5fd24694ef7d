//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! backend, covering the OAuth 2.0 token protocol and the read-only data
//! endpoints. It is the only layer that performs HTTP calls against
//! Spotify; everything above it works with typed payloads.
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule
//! handles one domain of Spotify API functionality:
//!
//! ```text
//! HTTP Surface (api, server)
//!          ↓
//! Lifecycle Manager (management)
//!          ↓
//! Spotify Integration Layer
//!     ├── Token Protocol (code exchange, refresh)
//!     ├── Player State (current playback, recently played)
//!     └── User Data (profile, top tracks, top artists)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - OAuth 2.0 token endpoint calls: exchanges authorization
//!   codes for access/refresh token pairs and refreshes expired access
//!   tokens. Client credentials travel as HTTP Basic authentication; the
//!   functions return the raw token payload and leave persistence and
//!   expiry decisions to the lifecycle manager.
//! - [`player`] - Playback queries: the current playback state (including
//!   the no-active-session case) and the recently played history.
//! - [`user`] - Profile and listening statistics: the authenticated user's
//!   profile, top tracks (kept as raw JSON for pass-through) and top
//!   artists.
//!
//! ## API Coverage
//!
//! - `POST {token_url}` - Token exchange and refresh operations
//! - `GET /me/player` - Current playback state
//! - `GET /me/player/recently-played` - Play history
//! - `GET /me` - User profile
//! - `GET /me/top/tracks` - Top tracks per time range
//! - `GET /me/top/artists` - Top artists per time range
//!
//! ## Error Handling Philosophy
//!
//! No call in this module is retried; every failure is reported upward
//! immediately and classified at the boundary above. Token protocol
//! functions return `Result<_, String>` carrying the provider's status and
//! error body; data endpoints return `reqwest::Error` which the HTTP
//! surface maps to a bad-gateway response.
//!
//! ## Configuration Integration
//!
//! All functions take a [`crate::config::SpotifyConfig`] so that endpoint
//! URLs and credentials come from one immutable startup value. Tests point
//! the token URL at a local stub server through the same mechanism.

pub mod auth;
pub mod player;
pub mod user;
