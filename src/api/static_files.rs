use std::sync::Arc;

use axum::{
    Extension,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};

use crate::{server::AppState, utils};

/// Serves files from the public directory for every path without a route.
pub async fn static_file(uri: Uri, Extension(state): Extension<Arc<AppState>>) -> Response {
    let Some(path) = utils::resolve_static_path(&state.config.public_dir, uri.path()) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match async_fs::read(&path).await {
        Ok(contents) => (
            [(header::CONTENT_TYPE, utils::content_type_for(&path))],
            contents,
        )
            .into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}
