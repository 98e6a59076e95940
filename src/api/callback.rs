use std::sync::Arc;

use axum::{
    Extension,
    extract::Query,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{
    api::ApiError, config::POST_LOGIN_REDIRECT, server::AppState, spotify, success,
    types::CallbackParams, utils, warning,
};

/// Finishes a login started by `/login`.
///
/// The `state` must belong to a login started by the same browser, i.e. the
/// session cookie sent along has to match the session that called `/login`.
pub async fn callback(
    headers: HeaderMap,
    Query(params): Query<CallbackParams>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Response, ApiError> {
    if let Some(reason) = params.error {
        warning!("Spotify authorization failed: {}", reason);
        return Err(ApiError::AuthorizationDenied(reason));
    }

    let Some(code) = params.code.filter(|c| !c.is_empty()) else {
        return Err(ApiError::MissingCode);
    };

    let Some(oauth_state) = params.state else {
        return Err(ApiError::InvalidState);
    };

    let cookie_session = utils::session_id_from_headers(&headers);
    let Some(session_id) = state
        .sessions
        .complete_login(&oauth_state, cookie_session.as_deref())
        .await
    else {
        warning!("Callback with unknown, expired or foreign state");
        return Err(ApiError::InvalidState);
    };

    let token = match spotify::auth::exchange_code(&state.http, &state.config, &code).await {
        Ok(token) => token,
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            return Err(ApiError::TokenExchange);
        }
    };

    state.sessions.store_token(&session_id, token).await;
    success!("Token received");

    Ok((
        StatusCode::FOUND,
        [
            (header::LOCATION, POST_LOGIN_REDIRECT.to_string()),
            (header::SET_COOKIE, utils::session_cookie(&session_id)),
        ],
    )
        .into_response())
}
