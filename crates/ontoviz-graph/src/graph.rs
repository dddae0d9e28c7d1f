//! In-memory taxonomy graph keyed by label.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

/// Directed graph of labels. Edges form a set: adding an existing
/// parent → child pair is a no-op. Cycles and self-loops are kept.
#[derive(Debug, Clone, Default)]
pub struct TaxonomyGraph {
    graph: DiGraph<String, ()>,
    index: HashMap<String, NodeIndex>,
}

impl TaxonomyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the node for `label`, creating it if needed.
    pub fn add_node(&mut self, label: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(label) {
            return idx;
        }
        let idx = self.graph.add_node(label.to_string());
        self.index.insert(label.to_string(), idx);
        idx
    }

    /// Insert `parent → child`, creating endpoints implicitly.
    /// Returns `false` if the edge was already present.
    pub fn add_edge(&mut self, parent: &str, child: &str) -> bool {
        let from = self.add_node(parent);
        let to = self.add_node(child);
        if self.graph.find_edge(from, to).is_some() {
            return false;
        }
        self.graph.add_edge(from, to, ());
        true
    }

    pub fn contains_node(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn contains_edge(&self, parent: &str, child: &str) -> bool {
        match (self.index.get(parent), self.index.get(child)) {
            (Some(&from), Some(&to)) => self.graph.find_edge(from, to).is_some(),
            _ => false,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Node labels in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// `(parent, child)` label pairs in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.edge_references().map(move |e| {
            (self.graph[e.source()].as_str(), self.graph[e.target()].as_str())
        })
    }
}
