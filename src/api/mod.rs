//! # API Module
//!
//! This module provides the HTTP endpoints of the relay. Together they implement
//! the Spotify authorization-code login for a browser and serve the signed-in
//! user's listening statistics.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`login`] - `GET /login`. Starts a login for the caller's session and
//!   redirects (302) to Spotify's authorization page with the fixed scope set.
//! - [`callback`] - `GET /callback`. Exchanges the authorization code for an
//!   access token, stores it in the session and redirects (302) to
//!   `/stats.html`. Failures answer with 400 or 502 and a plain-text body.
//!
//! ### Statistics
//!
//! - [`stats`] - `GET /me/stats`. Returns
//!   `{topTrack, topArtist, nowPlaying, fullStats}` for the session's token,
//!   401 without one and 500 when Spotify fails.
//!
//! ### Monitoring
//!
//! - [`health`] - `GET /health`. Status, version and active session count.
//!
//! ### Static Files
//!
//! - [`static_file`] - Fallback for every other path, served from the public
//!   directory.
//!
//! ## Sessions
//!
//! Handlers identify the caller by the `spotstats_session` cookie. Tokens are
//! kept per session in the [`SessionManager`](crate::management::SessionManager),
//! so two browsers never see each other's data.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use spotstats::api::{callback, login, stats};
//!
//! let app = Router::new()
//!     .route("/login", get(login))
//!     .route("/callback", get(callback))
//!     .route("/me/stats", get(stats));
//! ```

mod callback;
mod error;
mod health;
mod login;
mod static_files;
mod stats;

pub use callback::callback;
pub use error::ApiError;
pub use health::health;
pub use login::login;
pub use static_files::static_file;
pub use stats::stats;
