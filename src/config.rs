//! Configuration management for the Spotify stats relay.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Values are read once at startup into a [`Config`]
//! which is then handed to the server, so request handlers never touch the
//! process environment.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the current working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use reqwest::Url;

/// Scopes requested during login. Covers top items, recently played and the
/// current playback state.
pub const SPOTIFY_AUTH_SCOPE: &str =
    "user-read-recently-played user-top-read user-read-playback-state";

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:3001";
pub const DEFAULT_SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Page the browser lands on after a successful login.
pub const POST_LOGIN_REDIRECT: &str = "/stats.html";

/// Loads environment variables from `.env` files.
///
/// Looks for a `.env` file in the current working directory first and then in
/// the platform-specific local data directory under `spotstats/.env`. Variables
/// that are already set in the process environment are never overwritten.
///
/// # Directory Structure
///
/// The data directory fallback resolves to:
/// - Linux: `~/.local/share/spotstats/.env`
/// - macOS: `~/Library/Application Support/spotstats/.env`
/// - Windows: `%LOCALAPPDATA%/spotstats/.env`
///
/// # Errors
///
/// Returns an error only if a `.env` file exists but cannot be parsed. A missing
/// file is not an error since all values may come from the environment.
pub async fn load_env() -> Result<(), String> {
    match dotenv::dotenv() {
        Ok(_) => return Ok(()),
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e.to_string()),
    }

    let path = env_file_path();
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotstats/.env");
    path
}

/// Runtime configuration of the relay.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub server_address: String,
    pub auth_url: Url,
    pub token_url: String,
    pub api_url: String,
    pub public_dir: PathBuf,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// # Required Variables
    ///
    /// - `SPOTIFY_API_AUTH_CLIENT_ID`
    /// - `SPOTIFY_API_AUTH_CLIENT_SECRET`
    /// - `SPOTIFY_API_REDIRECT_URI`
    ///
    /// # Optional Variables
    ///
    /// - `SERVER_ADDRESS` (default `0.0.0.0:3001`)
    /// - `SPOTIFY_API_AUTH_URL`, `SPOTIFY_API_TOKEN_URL`, `SPOTIFY_API_URL`
    ///   (default to the public Spotify endpoints)
    /// - `PUBLIC_DIR` (default `public`)
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending variable if a required variable
    /// is missing or the authorization URL cannot be parsed.
    pub fn from_env() -> Result<Self, String> {
        let auth_url = optional("SPOTIFY_API_AUTH_URL", DEFAULT_SPOTIFY_AUTH_URL);
        let auth_url = Url::parse(&auth_url)
            .map_err(|e| format!("SPOTIFY_API_AUTH_URL is not a valid URL: {}", e))?;

        Ok(Self {
            client_id: required("SPOTIFY_API_AUTH_CLIENT_ID")?,
            client_secret: required("SPOTIFY_API_AUTH_CLIENT_SECRET")?,
            redirect_uri: required("SPOTIFY_API_REDIRECT_URI")?,
            server_address: optional("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            auth_url,
            token_url: optional("SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_TOKEN_URL),
            api_url: optional("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL)
                .trim_end_matches('/')
                .to_string(),
            public_dir: PathBuf::from(optional("PUBLIC_DIR", DEFAULT_PUBLIC_DIR)),
        })
    }
}

fn required(name: &str) -> Result<String, String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(format!("{} must be set", name)),
    }
}

fn optional(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
