//! ontoviz-graph — Taxonomy graph construction from CSV path tables.
//!
//! ```text
//! tree.csv ──> PathTable ──┐
//!                          ├──> build_graph ──> TaxonomyGraph ──> NodeLinkData (JSON)
//! labels.csv ──> LabelMapping ┘
//! ```
//!
//! Each row of the tree table lists a hierarchy path across the columns
//! `Path Node 1`, `Path Node 2`, ... Consecutive non-empty cells become
//! parent → child edges between their labels.

pub mod labels;
pub mod tree;
pub mod graph;
pub mod builder;
pub mod node_link;
pub mod loader;

pub use builder::build_graph;
pub use graph::TaxonomyGraph;
pub use labels::LabelMapping;
pub use loader::load_graph;
pub use node_link::{LinkEntry, NodeEntry, NodeLinkData};
pub use tree::{is_missing, path_node_column, PathRow, PathTable, NA_TOKENS};
