//! Label-addressed graph construction
//!
//! Adapters and sample seeding describe graphs by label rather than by id;
//! the builder resolves labels to the first node carrying them.

use super::edge::Edge;
use super::node::Node;
use super::property::PropertyMap;
use super::store::Graph;
use super::types::{EdgeType, NodeType};
use tracing::debug;

/// Single-use builder that yields a [`Graph`]
#[derive(Debug)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    /// Create a builder around an empty directed graph named `"Graph"`
    pub fn new() -> Self {
        GraphBuilder {
            graph: Graph::default(),
        }
    }

    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.graph.name = name.into();
        self
    }

    pub fn set_directed(mut self, directed: bool) -> Self {
        self.graph.directed = directed;
        self
    }

    /// Add a new node; labels may repeat
    pub fn add_node(
        mut self,
        label: impl Into<String>,
        node_type: impl Into<NodeType>,
        properties: PropertyMap,
    ) -> Self {
        self.graph
            .add_node(Node::new_with_properties(label, node_type, properties));
        self
    }

    /// Add an edge between the first nodes carrying each label
    ///
    /// The edge is skipped when either label is unknown.
    pub fn add_edge(
        mut self,
        source_label: &str,
        target_label: &str,
        edge_type: impl Into<EdgeType>,
    ) -> Self {
        let source = self.graph.find_node_by_label(source_label).cloned();
        let target = self.graph.find_node_by_label(target_label).cloned();
        match (source, target) {
            (Some(source), Some(target)) => {
                self.graph.add_edge(Edge::between(&source, &target, edge_type));
            }
            _ => debug!(source_label, target_label, "Skipping edge with unknown endpoint"),
        }
        self
    }

    /// Finish and return the graph
    pub fn build(self) -> Graph {
        self.graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_empty() {
        let graph = GraphBuilder::new().build();
        assert_eq!(graph.name, "Graph");
        assert!(graph.directed);
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_build_by_labels() {
        let graph = GraphBuilder::new()
            .set_name("Pipeline")
            .set_directed(false)
            .add_node("A", "basic", PropertyMap::new())
            .add_node("B", "basic", PropertyMap::new())
            .add_edge("A", "B", "basic")
            .build();

        assert_eq!(graph.name, "Pipeline");
        assert!(!graph.directed);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);

        let a = graph.find_node_by_label("A").unwrap();
        assert_eq!(graph.get_neighbors(a.id)[0].label, "B");
    }

    #[test]
    fn test_unknown_label_skips_edge() {
        let graph = GraphBuilder::new()
            .add_node("A", "basic", PropertyMap::new())
            .add_edge("A", "Missing", "basic")
            .add_edge("Nope", "A", "basic")
            .build();

        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_duplicate_labels_resolve_to_first() {
        let graph = GraphBuilder::new()
            .add_node("X", "basic", PropertyMap::new())
            .add_node("X", "basic", PropertyMap::new())
            .add_node("Y", "basic", PropertyMap::new())
            .add_edge("X", "Y", "basic")
            .build();

        let first = graph.nodes()[0].id;
        assert_eq!(graph.edges()[0].source, first);
    }
}
