//! Indentation notation for trees
//!
//! Every two leading whitespace characters add one level; a line becomes a
//! child of the nearest preceding line one level up.

use super::{content_lines, leading_whitespace, SyntaxAdapter, SyntaxError, SyntaxResult, BUILTIN_VERSION};
use crate::graph::{Edge, Graph, Node, NodeId};
use std::collections::{HashMap, HashSet};
use tracing::debug;

const INDENT: &str = "  ";

fn level_of(line: &str) -> usize {
    leading_whitespace(line) / INDENT.len()
}

/// Adapter for indented tree text
#[derive(Debug, Clone, Default)]
pub struct HierarchyAdapter;

impl HierarchyAdapter {
    pub fn new() -> Self {
        HierarchyAdapter
    }
}

/// Parent to children adjacency of a graph, read once for export
///
/// Children keep edge insertion order. Roots are nodes with no incoming edge,
/// in node insertion order.
struct Forest<'g> {
    labels: HashMap<NodeId, &'g str>,
    children: HashMap<NodeId, Vec<NodeId>>,
    roots: Vec<NodeId>,
}

impl<'g> Forest<'g> {
    fn new(graph: &'g Graph) -> Self {
        let mut children: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
        let mut has_parent = HashSet::new();
        for edge in graph.edges() {
            children.entry(edge.source).or_default().push(edge.target);
            has_parent.insert(edge.target);
        }

        Forest {
            labels: graph.nodes().iter().map(|n| (n.id, n.label.as_str())).collect(),
            children,
            roots: graph
                .nodes()
                .iter()
                .map(|n| n.id)
                .filter(|id| !has_parent.contains(id))
                .collect(),
        }
    }

    /// Pre-order walk from every root, calling `visit(depth, label)`
    ///
    /// Uses an explicit stack so depth is bounded by memory, not by the
    /// thread stack. Reaching a node already on the current path is a cycle.
    fn walk(&self, mut visit: impl FnMut(usize, &str)) -> SyntaxResult<()> {
        for &root in &self.roots {
            let mut on_path = HashSet::new();
            // (node, index of the next child to descend into)
            let mut stack: Vec<(NodeId, usize)> = Vec::new();
            let mut pending = Some(root);

            loop {
                if let Some(id) = pending.take() {
                    if let Some(&label) = self.labels.get(&id) {
                        if !on_path.insert(id) {
                            return Err(SyntaxError::CycleDetected {
                                label: label.to_string(),
                            });
                        }
                        visit(stack.len(), label);
                        stack.push((id, 0));
                    }
                }

                let Some(frame) = stack.last_mut() else {
                    break;
                };
                let next = self
                    .children
                    .get(&frame.0)
                    .and_then(|kids| kids.get(frame.1))
                    .copied();
                match next {
                    Some(child) => {
                        frame.1 += 1;
                        pending = Some(child);
                    }
                    None => {
                        let id = frame.0;
                        on_path.remove(&id);
                        stack.pop();
                    }
                }
            }
        }
        Ok(())
    }
}

impl SyntaxAdapter for HierarchyAdapter {
    fn name(&self) -> &str {
        "hierarchy"
    }

    fn version(&self) -> &str {
        BUILTIN_VERSION
    }

    fn parse(&self, input: &str) -> SyntaxResult<Graph> {
        let mut graph = Graph::new("Hierarchy");
        let mut ancestors: Vec<Node> = Vec::new();

        for line in content_lines(input) {
            let level = level_of(line);
            let label = line.trim();

            let mut node = Node::with_type(label, "hierarchy_node");
            node.set_property("level", level);
            node.set_property("name", label);
            graph.add_node(node.clone());

            ancestors.truncate(level);
            if let Some(parent) = ancestors.last() {
                graph.add_edge(Edge::between(parent, &node, "parent_child"));
            }
            ancestors.push(node);
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Parsed hierarchy"
        );
        Ok(graph)
    }

    fn export(&self, graph: &Graph) -> SyntaxResult<String> {
        let mut lines = Vec::with_capacity(graph.node_count());
        Forest::new(graph).walk(|depth, label| {
            lines.push(format!("{}{}", INDENT.repeat(depth), label));
        })?;
        Ok(lines.join("\n"))
    }

    fn validate(&self, input: &str) -> bool {
        let mut previous: Option<usize> = None;
        for line in content_lines(input) {
            let level = level_of(line);
            let limit = previous.map_or(0, |p| p + 1);
            if level > limit {
                return false;
            }
            previous = Some(level);
        }
        true
    }
}
