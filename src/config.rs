//! Configuration management for the playlist diff tool.
//!
//! This module builds the runtime [`Config`] object from environment
//! variables and a `.env` file. The configuration is constructed once at
//! startup and passed explicitly into the authentication and API layers;
//! nothing in the comparison engine reads ambient process state.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (API endpoints and OAuth scope)

use std::{env, path::PathBuf};

use dotenv;

/// OAuth scope requested during authorization.
///
/// Fixed to read-only playlist access; the tool never needs write
/// permissions on the user's library.
pub const SPOTIFY_SCOPE: &str = "playlist-read-private playlist-read-collaborative";

const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Runtime configuration, constructed once at startup.
///
/// Holds the Spotify application credentials, the OAuth endpoints, and the
/// address of the local callback server. All consumers receive a reference
/// to this object instead of reading environment variables themselves.
///
/// # Example
///
/// ```
/// use spotdiff::config::Config;
///
/// #[tokio::main]
/// async fn main() {
///     match Config::load().await {
///         Ok(config) => println!("callback server on {}", config.server_address),
///         Err(e) => eprintln!("Configuration error: {}", e),
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Address and port for the local OAuth callback server, e.g. `127.0.0.1:8080`.
    pub server_address: String,
    /// Client ID of the registered Spotify application.
    pub client_id: String,
    /// Redirect URI registered with the Spotify application.
    pub redirect_uri: String,
    /// OAuth scope requested during authorization.
    pub scope: String,
    /// Base URL of the OAuth authorization endpoint.
    pub auth_url: String,
    /// URL of the OAuth token exchange endpoint.
    pub token_url: String,
    /// Base URL of the Spotify Web API.
    pub api_url: String,
}

impl Config {
    /// Loads the `.env` file from the local data directory and builds the
    /// configuration from the environment.
    ///
    /// Creates the data directory if it doesn't exist, loads variables from
    /// `spotdiff/.env` (values already present in the environment win), and
    /// then delegates to [`Config::from_env`].
    ///
    /// # Directory Structure
    ///
    /// The `.env` file is looked up in:
    /// - Linux: `~/.local/share/spotdiff/.env`
    /// - macOS: `~/Library/Application Support/spotdiff/.env`
    /// - Windows: `%LOCALAPPDATA%/spotdiff/.env`
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created or a
    /// required variable is missing.
    pub async fn load() -> Result<Self, String> {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spotdiff/.env");
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        // missing .env is fine as long as the environment itself is complete
        let _ = dotenv::from_path(path);

        Self::from_env()
    }

    /// Builds the configuration from environment variables alone.
    ///
    /// Required variables:
    /// - `SERVER_ADDRESS` - bind address for the local callback server
    /// - `SPOTIFY_API_AUTH_CLIENT_ID` - Spotify application client ID
    /// - `SPOTIFY_API_REDIRECT_URI` - registered OAuth redirect URI
    ///
    /// Optional overrides (defaults target the official Spotify endpoints):
    /// - `SPOTIFY_API_AUTH_URL`, `SPOTIFY_API_TOKEN_URL`, `SPOTIFY_API_URL`
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing required variable.
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            server_address: required("SERVER_ADDRESS")?,
            client_id: required("SPOTIFY_API_AUTH_CLIENT_ID")?,
            redirect_uri: required("SPOTIFY_API_REDIRECT_URI")?,
            scope: SPOTIFY_SCOPE.to_string(),
            auth_url: env::var("SPOTIFY_API_AUTH_URL")
                .unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string()),
            token_url: env::var("SPOTIFY_API_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
            api_url: env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("{} must be set", name))
}
