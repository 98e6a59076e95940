use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::types::ErrorBody;

/// Failures surfaced to the browser.
///
/// Callback failures answer with plain text since the user lands on them
/// directly; stats failures answer with JSON for the page's script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No session, or the session has no valid token.
    NotAuthenticated,
    /// Spotify redirected back with `error=...`, usually `access_denied`.
    AuthorizationDenied(String),
    MissingCode,
    /// The `state` is missing, unknown, already used or expired.
    InvalidState,
    /// The code could not be exchanged for a token.
    TokenExchange,
    /// Fetching the statistics from Spotify failed.
    Upstream,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotAuthenticated => StatusCode::UNAUTHORIZED,
            ApiError::AuthorizationDenied(_) | ApiError::MissingCode | ApiError::InvalidState => {
                StatusCode::BAD_REQUEST
            }
            ApiError::TokenExchange => StatusCode::BAD_GATEWAY,
            ApiError::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotAuthenticated => write!(f, "Not authenticated"),
            ApiError::AuthorizationDenied(reason) => {
                write!(f, "Spotify authorization was denied: {}", reason)
            }
            ApiError::MissingCode => write!(f, "Missing authorization code"),
            ApiError::InvalidState => write!(f, "Invalid or expired login state, please log in again"),
            ApiError::TokenExchange => write!(f, "Failed to authenticate with Spotify"),
            ApiError::Upstream => write!(f, "Failed to fetch Spotify statistics"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::NotAuthenticated | ApiError::Upstream => {
                let body = ErrorBody {
                    error: self.to_string(),
                };
                (status, Json(body)).into_response()
            }
            _ => (status, self.to_string()).into_response(),
        }
    }
}
