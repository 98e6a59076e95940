use std::sync::Arc;

use axum::{Extension, Json, http::HeaderMap};

use crate::{
    api::ApiError, server::AppState, spotify, types::StatsResponse, utils, warning,
};

/// Serves top track, top artist and now playing of the signed-in user.
pub async fn stats(
    headers: HeaderMap,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<StatsResponse>, ApiError> {
    let Some(session_id) = utils::session_id_from_headers(&headers) else {
        return Err(ApiError::NotAuthenticated);
    };

    let Some(token) = state.sessions.token(&session_id).await else {
        return Err(ApiError::NotAuthenticated);
    };

    match spotify::stats::get_stats(&state.http, &state.config, &token.access_token).await {
        Ok(stats) => Ok(Json(StatsResponse::from(stats))),
        Err(e) => {
            warning!("Failed to fetch stats: {}", e);
            Err(ApiError::Upstream)
        }
    }
}
