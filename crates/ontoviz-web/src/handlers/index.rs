//! Main page: the HTML shell that fetches /graph_data and draws it.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use minijinja::context;
use ontoviz_common::error::OntovizError;
use tracing::error;

use crate::state::{AppState, SharedState};

pub const INDEX_TEMPLATE: &str = "index.html";

const TEMPLATE_ERROR_HTML: &str = "<h1>Failed to load template.</h1>";

pub async fn index(State(state): State<SharedState>) -> Response {
    match render_index(&state) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render {}: {}", INDEX_TEMPLATE, e);
            (StatusCode::INTERNAL_SERVER_ERROR, Html(TEMPLATE_ERROR_HTML)).into_response()
        }
    }
}

fn render_index(state: &AppState) -> Result<String, OntovizError> {
    let template = state
        .templates
        .get_template(INDEX_TEMPLATE)
        .map_err(|e| OntovizError::Template(e.to_string()))?;

    template
        .render(context! {
            title => "Ontology Viewer",
            node_count => state.graph.node_count(),
            edge_count => state.graph.edge_count(),
        })
        .map_err(|e| OntovizError::Template(e.to_string()))
}
