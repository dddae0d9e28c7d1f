//! Axum router — maps all URL paths to handlers.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{favicon::favicon, graph::graph_data, index::index};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/",            get(index))
        .route("/graph_data",  get(graph_data))
        .route("/favicon.ico", get(favicon))

        // Static files
        .nest_service("/static", static_files)

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
