//! Node-link JSON encoding of the taxonomy graph.
//!
//! ```json
//! {
//!   "directed": true,
//!   "multigraph": false,
//!   "graph": {},
//!   "nodes": [{"id": "Animal"}, {"id": "Dog"}],
//!   "links": [{"source": "Animal", "target": "Dog"}]
//! }
//! ```
//!
//! Nodes are sorted by id and links by `(source, target)` so the output is
//! stable across runs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use ontoviz_common::error::{OntovizError, Result};

use crate::graph::TaxonomyGraph;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkData {
    #[serde(default = "default_directed")]
    pub directed: bool,
    #[serde(default)]
    pub multigraph: bool,
    #[serde(default)]
    pub graph: Map<String, Value>,
    pub nodes: Vec<NodeEntry>,
    pub links: Vec<LinkEntry>,
}

fn default_directed() -> bool { true }

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeEntry {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LinkEntry {
    pub source: String,
    pub target: String,
}

impl NodeLinkData {
    pub fn from_graph(graph: &TaxonomyGraph) -> Self {
        let mut nodes: Vec<NodeEntry> = graph
            .nodes()
            .map(|id| NodeEntry { id: id.to_string() })
            .collect();
        nodes.sort();

        let mut links: Vec<LinkEntry> = graph
            .edges()
            .map(|(source, target)| LinkEntry {
                source: source.to_string(),
                target: target.to_string(),
            })
            .collect();
        links.sort();

        Self {
            directed: true,
            multigraph: false,
            graph: Map::new(),
            nodes,
            links,
        }
    }

    /// Rebuild a graph. Every link endpoint must be listed in `nodes`.
    pub fn into_graph(self) -> Result<TaxonomyGraph> {
        let mut graph = TaxonomyGraph::new();
        for node in &self.nodes {
            graph.add_node(&node.id);
        }
        for link in &self.links {
            for endpoint in [&link.source, &link.target] {
                if !graph.contains_node(endpoint) {
                    return Err(OntovizError::UnknownNode(endpoint.clone()));
                }
            }
            graph.add_edge(&link.source, &link.target);
        }
        Ok(graph)
    }

    pub fn to_json_vec(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl TaxonomyGraph {
    pub fn to_node_link(&self) -> NodeLinkData {
        NodeLinkData::from_graph(self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn sample() -> TaxonomyGraph {
        let mut graph = TaxonomyGraph::new();
        graph.add_edge("Root", "Mammal");
        graph.add_edge("Mammal", "Dog");
        graph.add_edge("Mammal", "Cat");
        graph
    }

    #[test]
    fn test_json_shape() {
        let mut graph = TaxonomyGraph::new();
        graph.add_edge("X", "Y");

        let value = serde_json::to_value(graph.to_node_link()).unwrap();
        assert_eq!(
            value,
            json!({
                "directed": true,
                "multigraph": false,
                "graph": {},
                "nodes": [{"id": "X"}, {"id": "Y"}],
                "links": [{"source": "X", "target": "Y"}]
            })
        );
    }

    #[test]
    fn test_output_is_sorted() {
        let data = sample().to_node_link();
        let ids: Vec<&str> = data.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["Cat", "Dog", "Mammal", "Root"]);

        let links: Vec<(&str, &str)> = data
            .links
            .iter()
            .map(|l| (l.source.as_str(), l.target.as_str()))
            .collect();
        assert_eq!(
            links,
            vec![("Mammal", "Cat"), ("Mammal", "Dog"), ("Root", "Mammal")]
        );
    }

    #[test]
    fn test_round_trip_preserves_nodes_and_edges() {
        let original = sample();
        let bytes = original.to_node_link().to_json_vec().unwrap();
        let rebuilt = NodeLinkData::from_json_slice(&bytes)
            .unwrap()
            .into_graph()
            .unwrap();

        let nodes = |g: &TaxonomyGraph| g.nodes().map(str::to_string).collect::<BTreeSet<_>>();
        let edges = |g: &TaxonomyGraph| {
            g.edges()
                .map(|(s, t)| (s.to_string(), t.to_string()))
                .collect::<BTreeSet<_>>()
        };
        assert_eq!(nodes(&original), nodes(&rebuilt));
        assert_eq!(edges(&original), edges(&rebuilt));
    }

    #[test]
    fn test_repeated_serialization_identical() {
        let graph = sample();
        assert_eq!(graph.to_node_link(), graph.to_node_link());
    }

    #[test]
    fn test_link_to_unknown_node_rejected() {
        let data = NodeLinkData::from_json_slice(
            br#"{"nodes": [{"id": "A"}], "links": [{"source": "A", "target": "B"}]}"#,
        )
        .unwrap();
        assert!(data.directed);
        match data.into_graph() {
            Err(OntovizError::UnknownNode(id)) => assert_eq!(id, "B"),
            other => panic!("expected UnknownNode, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_graph_serializes_empty_arrays() {
        let value = serde_json::to_value(TaxonomyGraph::new().to_node_link()).unwrap();
        assert_eq!(value["nodes"], json!([]));
        assert_eq!(value["links"], json!([]));
    }
}
