//! # Spotify Integration Module
//!
//! This module is the relay's only point of contact with the Spotify Web API.
//! It builds the authorization URL, exchanges authorization codes for access
//! tokens and fetches the listening statistics served by `/me/stats`.
//!
//! ## Architecture
//!
//! ```text
//! HTTP Endpoints (login, callback, stats)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (authorization URL, code exchange)
//!     └── Statistics (top track, top artist, now playing)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! All functions borrow a shared [`reqwest::Client`] so connections are pooled
//! across requests, and the [`Config`](crate::config::Config) holding the
//! endpoint URLs and client credentials.
//!
//! ## Error Handling
//!
//! Every outbound call returns [`SpotifyError`]. Non-success statuses keep the
//! response body so the caller can log what Spotify complained about. Nothing
//! is retried.

pub mod auth;
pub mod stats;

use std::fmt;

use reqwest::{Response, StatusCode};

#[derive(Debug)]
pub enum SpotifyError {
    /// Transport failure or a body that could not be decoded.
    Http(reqwest::Error),
    /// Spotify answered with a non-success status.
    Status { status: StatusCode, body: String },
}

impl fmt::Display for SpotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpotifyError::Http(e) => write!(f, "request to Spotify failed: {}", e),
            SpotifyError::Status { status, body } if body.is_empty() => {
                write!(f, "Spotify responded with {}", status)
            }
            SpotifyError::Status { status, body } => {
                write!(f, "Spotify responded with {}: {}", status, body)
            }
        }
    }
}

impl std::error::Error for SpotifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpotifyError::Http(e) => Some(e),
            SpotifyError::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for SpotifyError {
    fn from(err: reqwest::Error) -> Self {
        SpotifyError::Http(err)
    }
}

/// Turns a non-success response into [`SpotifyError::Status`], keeping the body.
async fn check_status(response: Response) -> Result<Response, SpotifyError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(SpotifyError::Status { status, body })
}
