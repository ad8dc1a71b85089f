//! # CLI Module
//!
//! This module provides the command-line interface layer for spotdiff, a
//! Spotify API client for comparing the track lists of two playlists. It
//! implements all user-facing commands and coordinates between the Spotify
//! integration layer, the comparison engine, and terminal output.
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Initiates the Spotify OAuth authentication flow with PKCE security
//!
//! ### Playlist Queries
//!
//! - [`list_playlists`] - Displays the user's playlists with optional search filtering
//! - [`tracks`] - Displays the track listing of a single playlist
//!
//! ### Comparison Operations
//!
//! - [`diff`] - Exact-match comparison of two playlists by track id
//! - [`similar`] - Fuzzy comparison of two playlists by title/artist similarity
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered architecture approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Comparison Engine (pure functions)  +  Management Layer (token cache)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Each command resolves its inputs, drives the paginated fetches with
//! progress feedback, hands the finalized sequences to the engine, and
//! renders the result as tables. The engine itself never performs I/O.
//!
//! ## Error Handling Philosophy
//!
//! - **Precondition gates**: an unresolvable playlist argument or the same
//!   playlist given twice produces a guidance message; the comparison is
//!   never invoked.
//! - **Remote failures**: a rejected fetch aborts the request with an
//!   inline error and no partial output.
//! - **Helpful messages**: errors include the next step to take (e.g. run
//!   `spotdiff auth` when no token is cached).
//!
//! ## Progress and User Experience
//!
//! Long-running fetches show `indicatif` spinners with page-level progress;
//! results are rendered as `tabled` tables; status lines use the colored
//! output macros from the crate root.

mod auth;
mod common;
mod diff;
mod playlists;
mod similar;
mod tracks;

pub use auth::auth;
pub use diff::diff;
pub use playlists::list_playlists;
pub use similar::similar;
pub use tracks::tracks;
