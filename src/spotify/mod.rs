//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by
//! spotdiff: authentication, playlist enumeration, and the paginated track
//! catalog loader feeding the comparison engine. It handles all HTTP
//! communication, the OAuth flow, and transient-error retries.
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule
//! handles a specific domain of Spotify API functionality:
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     ├── User Profile (display name)
//!     └── Playlist Operations (listing, track catalog)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! [`auth`] implements OAuth 2.0 with PKCE (Proof Key for Code Exchange):
//!
//! 1. **Code Verifier Generation**: Creates a cryptographically random verifier
//! 2. **Challenge Creation**: Derives a SHA256 challenge from the verifier
//! 3. **Authorization Request**: Directs the user to Spotify with the challenge
//! 4. **Local Callback**: Receives the authorization code via a temporary HTTP server
//! 5. **Token Exchange**: Exchanges code + verifier for an access token
//! 6. **Token Storage**: Persists the token for future runs
//!
//! PKCE avoids storing a client secret; only the public client ID is needed.
//! The requested scope is restricted to read-only playlist access.
//!
//! ## Pagination and Resilience
//!
//! [`playlists`] fetches `/me/playlists` and `/playlists/{id}/tracks` one
//! page at a time, following Spotify's absolute `next` cursor until it is
//! exhausted. Transient failures are handled in the transport layer:
//!
//! - **502 Bad Gateway**: retried after a fixed delay
//! - **429 Too Many Requests**: the `Retry-After` header is honored within
//!   a sane bound
//! - **Request timeout**: every request carries a bounded timeout
//!
//! All other HTTP errors (expired token, missing playlist, revoked access)
//! are propagated to the CLI layer, which reports them inline and aborts
//! the current request without partial output.
//!
//! ## API Coverage
//!
//! - `GET /me` - profile of the authenticated user
//! - `GET /me/playlists` - the user's playlists, paginated
//! - `GET /playlists/{id}/tracks` - track listing of a playlist, paginated
//! - `POST /api/token` - token exchange and refresh
//!
//! ## Error Types
//!
//! All functions return `Result` types:
//! - **`reqwest::Error`** - HTTP client errors, network issues, API errors
//! - **`String`** - authentication and token management errors

pub mod auth;
pub mod playlists;
pub mod user;

/// Delay before retrying a request that failed with 502 Bad Gateway.
pub(crate) const RETRY_DELAY_SECS: u64 = 10;

/// Upper bound on each HTTP request before it is abandoned.
pub(crate) const REQUEST_TIMEOUT_SECS: u64 = 30;
