//! Arrow-list notation: one `source -> target` pair per line
//!
//! The same grammar backs two registered notations that differ only in the
//! names and types they stamp on the graph: `basic_graph` and `process`.

use super::{content_lines, SyntaxAdapter, SyntaxResult, BUILTIN_VERSION};
use crate::graph::{Edge, EdgeType, Graph, GraphError, Node, NodeType};
use tracing::debug;

const ARROW: &str = "->";

/// Adapter for arrow-list text, parameterized by naming and typing
#[derive(Debug, Clone)]
pub struct ArrowListAdapter {
    name: String,
    graph_name: String,
    node_type: NodeType,
    edge_type: EdgeType,
}

impl ArrowListAdapter {
    /// Create an adapter with custom naming and typing
    pub fn new(
        name: impl Into<String>,
        graph_name: impl Into<String>,
        node_type: impl Into<NodeType>,
        edge_type: impl Into<EdgeType>,
    ) -> Self {
        ArrowListAdapter {
            name: name.into(),
            graph_name: graph_name.into(),
            node_type: node_type.into(),
            edge_type: edge_type.into(),
        }
    }

    /// Plain arrow lists: nodes `basic`, edges `basic`
    pub fn basic_graph() -> Self {
        Self::new("basic_graph", "Basic Graph", "basic", "basic")
    }

    /// Process flows: nodes `process_step`, edges `process_flow`
    pub fn process() -> Self {
        Self::new("process", "Process Diagram", "process_step", "process_flow")
    }

    pub fn node_type(&self) -> &NodeType {
        &self.node_type
    }

    pub fn edge_type(&self) -> &EdgeType {
        &self.edge_type
    }

    /// Reuse the first node with this label, or add a new one
    fn node_for_label(&self, graph: &mut Graph, label: &str) -> Node {
        if let Some(existing) = graph.find_node_by_label(label) {
            return existing.clone();
        }
        let mut node = Node::with_type(label, self.node_type.clone());
        node.set_property("name", label);
        graph.add_node(node.clone());
        node
    }
}

/// Split a line into trimmed source and target labels
///
/// Lines with zero or several arrows yield `None`.
fn split_pair(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split(ARROW);
    let source = parts.next()?;
    let target = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((source.trim(), target.trim()))
}

impl SyntaxAdapter for ArrowListAdapter {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        BUILTIN_VERSION
    }

    fn parse(&self, input: &str) -> SyntaxResult<Graph> {
        let mut graph = Graph::new(self.graph_name.clone());

        for line in input.trim().lines() {
            let Some((source_label, target_label)) = split_pair(line.trim()) else {
                continue;
            };
            let source = self.node_for_label(&mut graph, source_label);
            let target = self.node_for_label(&mut graph, target_label);
            graph.add_edge(Edge::between(&source, &target, self.edge_type.clone()));
        }

        debug!(
            syntax = %self.name,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Parsed arrow list"
        );
        Ok(graph)
    }

    fn export(&self, graph: &Graph) -> SyntaxResult<String> {
        let mut lines = Vec::with_capacity(graph.edge_count());
        for edge in graph.edges() {
            let source = graph
                .get_node_by_id(edge.source)
                .ok_or(GraphError::NodeNotFound(edge.source))?;
            let target = graph
                .get_node_by_id(edge.target)
                .ok_or(GraphError::NodeNotFound(edge.target))?;
            lines.push(format!("{} {} {}", source.label, ARROW, target.label));
        }
        Ok(lines.join("\n"))
    }

    fn validate(&self, input: &str) -> bool {
        content_lines(input).all(|line| line.contains(ARROW))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label_pairs(graph: &Graph) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = graph
            .edges()
            .iter()
            .map(|e| {
                (
                    graph.get_node_by_id(e.source).unwrap().label.clone(),
                    graph.get_node_by_id(e.target).unwrap().label.clone(),
                )
            })
            .collect();
        pairs.sort();
        pairs
    }

    #[test]
    fn test_parse_reuses_nodes_by_label() {
        let adapter = ArrowListAdapter::basic_graph();
        let graph = adapter.parse("A -> B\nB -> C\nA -> C").unwrap();

        assert_eq!(graph.name, "Basic Graph");
        assert!(graph.directed);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);

        let a = graph.find_node_by_label("A").unwrap();
        assert_eq!(a.node_type.as_str(), "basic");
        assert_eq!(a.get_property("name").unwrap().as_string(), Some("A"));
        assert!(graph.edges().iter().all(|e| e.edge_type.as_str() == "basic" && e.directed));
    }

    #[test]
    fn test_parse_skips_unusable_lines() {
        let adapter = ArrowListAdapter::basic_graph();
        let graph = adapter.parse("  A -> B  \nnot an edge\nX -> Y -> Z\n\n").unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_parse_empty_input() {
        let graph = ArrowListAdapter::basic_graph().parse("   \n  ").unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_parse_missing_side_yields_empty_label() {
        let graph = ArrowListAdapter::basic_graph().parse("-> B").unwrap();
        assert_eq!(graph.node_count(), 2);
        assert!(graph.find_node_by_label("").is_some());
    }

    #[test]
    fn test_parse_crlf() {
        let graph = ArrowListAdapter::basic_graph().parse("A -> B\r\nB -> C\r\n").unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.find_node_by_label("B").is_some());
    }

    #[test]
    fn test_process_typing() {
        let adapter = ArrowListAdapter::process();
        assert_eq!(adapter.name(), "process");
        assert_eq!(adapter.version(), "1.0.0");

        let graph = adapter.parse("Start -> Review\nReview -> End").unwrap();
        assert_eq!(graph.name, "Process Diagram");
        assert!(graph.nodes().iter().all(|n| n.node_type.as_str() == "process_step"));
        assert!(graph.edges().iter().all(|e| e.edge_type.as_str() == "process_flow"));
    }

    #[test]
    fn test_export_in_edge_order() {
        let adapter = ArrowListAdapter::basic_graph();
        let graph = adapter.parse("A -> B\nB -> C").unwrap();
        assert_eq!(adapter.export(&graph).unwrap(), "A -> B\nB -> C");
    }

    #[test]
    fn test_export_omits_isolated_nodes() {
        let adapter = ArrowListAdapter::basic_graph();
        let mut graph = adapter.parse("A -> B").unwrap();
        graph.add_node(Node::new("Lonely"));
        assert_eq!(adapter.export(&graph).unwrap(), "A -> B");
    }

    #[test]
    fn test_round_trip_preserves_pairs() {
        let adapter = ArrowListAdapter::basic_graph();
        let original = adapter.parse("A -> B\nC -> A\nB -> C\nA -> B").unwrap();
        let text = adapter.export(&original).unwrap();
        let reparsed = adapter.parse(&text).unwrap();
        assert_eq!(label_pairs(&original), label_pairs(&reparsed));
    }

    #[test]
    fn test_validate() {
        let adapter = ArrowListAdapter::basic_graph();
        assert!(adapter.validate("A -> B\n\nB -> C"));
        assert!(adapter.validate(""));
        assert!(adapter.validate("X -> Y -> Z"));
        assert!(!adapter.validate("A -> B\njust text"));
    }

    #[test]
    fn test_split_pair() {
        assert_eq!(split_pair("A -> B"), Some(("A", "B")));
        assert_eq!(split_pair("A->B"), Some(("A", "B")));
        assert_eq!(split_pair("A"), None);
        assert_eq!(split_pair("A -> B -> C"), None);
    }
}
