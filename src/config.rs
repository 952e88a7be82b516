//! Configuration management for the Statify backend.
//!
//! This module loads environment variables from `.env` files and turns them
//! into an immutable [`Config`] that is built once at startup and shared
//! read-only by every request handler.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, net::SocketAddr, path::PathBuf, str::FromStr};

use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:5000/callback";
pub const DEFAULT_SCOPE: &str =
    "user-top-read user-read-recently-played user-read-private user-read-email";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_FRONTEND_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:5000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is not a valid URL: {reason}")]
    InvalidUrl { name: &'static str, reason: String },

    #[error("{name} is not a valid socket address: {value}")]
    InvalidAddress { name: &'static str, value: String },

    #[error("cannot prepare config directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Loads environment variables from `.env` files.
///
/// The working directory is checked first, then `statify/.env` inside the
/// platform-specific local data directory:
/// - Linux: `~/.local/share/statify/.env`
/// - macOS: `~/Library/Application Support/statify/.env`
/// - Windows: `%LOCALAPPDATA%/statify/.env`
///
/// Missing files are not an error; variables already present in the process
/// environment are never overwritten.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created.
pub async fn load_env() -> Result<(), ConfigError> {
    let _ = dotenv::dotenv();

    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    let _ = dotenv::from_path(path);
    Ok(())
}

fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("statify/.env");
    path
}

/// Immutable runtime configuration.
///
/// Holds the OAuth client credentials, the provider and API endpoints, the
/// frontend URL the OAuth callback redirects to, and the server bind address.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scope: String,
    pub auth_url: Url,
    pub token_url: Url,
    pub api_url: Url,
    pub frontend_url: Url,
    pub server_addr: SocketAddr,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Fails if `SPOTIFY_CLIENT_ID` or `SPOTIFY_CLIENT_SECRET` is missing, or
    /// if any URL or address variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));
        let url = |key: &'static str, default: &str| {
            let raw = get(key).unwrap_or_else(|| default.to_string());
            Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl {
                name: key,
                reason: e.to_string(),
            })
        };

        let raw_addr = get("SERVER_ADDRESS").unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string());
        let server_addr =
            SocketAddr::from_str(&raw_addr).map_err(|_| ConfigError::InvalidAddress {
                name: "SERVER_ADDRESS",
                value: raw_addr.clone(),
            })?;

        Ok(Self {
            client_id: required("SPOTIFY_CLIENT_ID")?,
            client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            redirect_uri: get("SPOTIFY_REDIRECT_URI")
                .unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string()),
            scope: get("SPOTIFY_API_AUTH_SCOPE").unwrap_or_else(|| DEFAULT_SCOPE.to_string()),
            auth_url: url("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)?,
            token_url: url("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)?,
            api_url: url("SPOTIFY_API_URL", DEFAULT_API_URL)?,
            frontend_url: url("FRONTEND_URL", DEFAULT_FRONTEND_URL)?,
            server_addr,
        })
    }
}
