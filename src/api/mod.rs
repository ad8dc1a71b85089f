//! # API Module
//!
//! This module provides the HTTP endpoints served by the temporary local
//! web server during authentication.
//!
//! ## Endpoints
//!
//! - [`callback`] - Handles OAuth callback requests from Spotify's
//!   authorization server. This endpoint completes the PKCE authentication
//!   flow by exchanging the authorization code for an access token.
//! - [`health`] - Returns application status and version information.
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web framework.
//! Each endpoint is an async function wired into Axum's routing system by
//! [`crate::server`]; shared state (the pending PKCE exchange and the
//! runtime configuration) is injected through request extensions.
//!
//! ## Security Considerations
//!
//! - Uses OAuth 2.0 PKCE flow for enhanced security without exposing client secrets
//! - Implements proper state management for temporary authentication data
//! - Handles authentication failures gracefully with appropriate error responses

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
