use std::sync::Arc;

use axum::{
    Extension,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{info, server::AppState, spotify, utils};

/// Sends the browser to Spotify's authorization page.
///
/// Starts a login for the caller's session, creating the session (and its
/// cookie) if the browser does not have one yet.
pub async fn login(
    headers: HeaderMap,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    let existing = utils::session_id_from_headers(&headers);
    let (session_id, oauth_state) = state.sessions.begin_login(existing.as_deref()).await;

    let auth_url = spotify::auth::authorize_url(&state.config, &oauth_state);
    info!("Redirecting to Spotify authorization: {}", auth_url);

    (
        StatusCode::FOUND,
        [
            (header::LOCATION, auth_url.to_string()),
            (header::SET_COOKIE, utils::session_cookie(&session_id)),
        ],
    )
        .into_response()
}
