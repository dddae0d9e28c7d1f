//! Path graph construction.
//!
//! For every row, consecutive `Path Node i` / `Path Node i+1` cells become a
//! `label(i) → label(i+1)` edge. Pairs where either cell is empty or an NA
//! marker are skipped, so a gap in a path splits it rather than bridging over
//! the hole.

use crate::graph::TaxonomyGraph;
use crate::labels::LabelMapping;
use crate::tree::{path_node_column, PathTable};

/// Build the taxonomy graph from a tree table and its label mapping.
pub fn build_graph(table: &PathTable, labels: &LabelMapping) -> TaxonomyGraph {
    let pairs = path_column_pairs(table);
    let mut graph = TaxonomyGraph::new();

    for row in table.rows() {
        for &(parent_col, child_col) in &pairs {
            let (Some(parent), Some(child)) = (row.cell(parent_col), row.cell(child_col)) else {
                continue;
            };
            graph.add_edge(labels.resolve(parent), labels.resolve(child));
        }
    }

    graph
}

/// Column index pairs for `Path Node i` → `Path Node i+1`, for i in
/// `1..column_count`. Indices whose columns are absent from the header are
/// dropped for every row.
fn path_column_pairs(table: &PathTable) -> Vec<(usize, usize)> {
    (1..table.column_count())
        .filter_map(|i| {
            let parent = table.column_index(&path_node_column(i))?;
            let child = table.column_index(&path_node_column(i + 1))?;
            Some((parent, child))
        })
        .collect()
}
