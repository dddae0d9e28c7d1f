//! Graph data API.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};
use ontoviz_common::error::ApiError;
use tracing::{debug, error};

use crate::state::SharedState;

/// GET /graph_data - node-link JSON of the whole graph
pub async fn graph_data(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let data = state.graph.to_node_link();
    let body = data.to_json_vec().map_err(|e| {
        error!("Failed to serialize graph data: {}", e);
        ApiError::from(e)
    })?;

    debug!("Serving graph data: {} nodes, {} links", data.nodes.len(), data.links.len());

    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}
