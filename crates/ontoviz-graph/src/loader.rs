//! Startup loading: read both tables and build the graph once.

use std::path::Path;

use ontoviz_common::config::DataConfig;
use ontoviz_common::error::{OntovizError, Result};
use tracing::{debug, info, warn};

use crate::builder::build_graph;
use crate::graph::TaxonomyGraph;
use crate::labels::LabelMapping;
use crate::tree::PathTable;

/// Load the tree and labels tables named in `config` and build the graph.
///
/// Both files are checked for existence before either is read.
pub async fn load_graph(config: &DataConfig) -> Result<TaxonomyGraph> {
    ensure_exists(&config.tree_file)?;
    ensure_exists(&config.labels_file)?;

    let tree_text = read_table(&config.tree_file).await?;
    let labels_text = read_table(&config.labels_file).await?;

    let table = PathTable::from_reader(tree_text.as_bytes(), &config.tree_file)?;
    info!(
        "Loaded {}: {} rows, {} columns",
        config.tree_file.display(),
        table.row_count(),
        table.column_count()
    );

    let labels = LabelMapping::from_reader(labels_text.as_bytes(), &config.labels_file)?;
    info!("Label mapping built: {} terms", labels.len());

    let graph = build_graph(&table, &labels);
    info!(
        "Graph built: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    if graph.is_empty() {
        warn!(
            "Graph is empty; check that {} has 'Path Node 1', 'Path Node 2', ... columns",
            config.tree_file.display()
        );
    }

    Ok(graph)
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(OntovizError::MissingFile(path.to_path_buf()))
    }
}

/// Read a CSV file as UTF-8. A leading byte-order mark is left for the csv
/// reader to drop.
async fn read_table(path: &Path) -> Result<String> {
    debug!("Reading {}", path.display());
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| OntovizError::Io {
            path: path.to_path_buf(),
            source,
        })
}
