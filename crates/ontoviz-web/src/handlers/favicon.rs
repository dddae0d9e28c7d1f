//! Site icon.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::state::SharedState;

pub const FAVICON_FILE: &str = "favicon.ico";
pub const FAVICON_MIME: &str = "image/vnd.microsoft.icon";

/// GET /favicon.ico - served from the static directory, 404 when unavailable
pub async fn favicon(State(state): State<SharedState>) -> Response {
    let path = state.static_dir.join(FAVICON_FILE);
    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, FAVICON_MIME)], bytes).into_response(),
        Err(e) => {
            warn!("Could not read {}: {}", path.display(), e);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
