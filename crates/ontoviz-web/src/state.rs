//! Shared application state for the web server.

use std::path::PathBuf;
use std::sync::Arc;

use minijinja::{path_loader, Environment};
use ontoviz_common::config::ServerConfig;
use ontoviz_graph::TaxonomyGraph;

/// Shared state injected into every Axum handler.
///
/// The graph is built once before the server starts and never mutated, so
/// handlers read it without locking.
pub struct AppState {
    pub graph: TaxonomyGraph,
    /// Templates are loaded from disk on first render, so a missing file
    /// surfaces as a per-request error rather than a startup failure.
    pub templates: Environment<'static>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(graph: TaxonomyGraph, server: &ServerConfig) -> Self {
        let mut templates = Environment::new();
        templates.set_loader(path_loader(server.templates_dir.clone()));

        Self {
            graph,
            templates,
            static_dir: server.static_dir.clone(),
        }
    }
}

pub type SharedState = Arc<AppState>;
