//! Text notations for graphs
//!
//! Each notation is a [`SyntaxAdapter`]: it parses text into a [`Graph`],
//! exports a graph back to text, and checks text cheaply before parsing.
//! Adapters are looked up by name through the [`SyntaxRegistry`].

pub mod arrow;
pub mod hierarchy;
pub mod registry;

use crate::graph::{Graph, GraphError};
use thiserror::Error;

pub use arrow::ArrowListAdapter;
pub use hierarchy::HierarchyAdapter;
pub use registry::SyntaxRegistry;

/// Version reported by the built-in adapters
pub const BUILTIN_VERSION: &str = "1.0.0";

/// Errors raised by notations and the registry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("Unknown syntax: {0}")]
    FormatNotFound(String),

    #[error("Failed to initialise syntax {name}: {reason}")]
    AdapterInit { name: String, reason: String },

    #[error("Cycle detected at node '{label}'")]
    CycleDetected { label: String },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// A parser and serializer for one text notation
///
/// `validate` is the gate for malformed input: `parse` accepts anything and
/// skips what it cannot use, and `validate` never fails or panics.
pub trait SyntaxAdapter: Send + Sync {
    /// Registry key for this notation
    fn name(&self) -> &str;

    /// Informational version string
    fn version(&self) -> &str;

    /// Build a new graph from text
    fn parse(&self, input: &str) -> SyntaxResult<Graph>;

    /// Render a graph as text
    fn export(&self, graph: &Graph) -> SyntaxResult<String>;

    /// Check whether text is well formed for this notation
    fn validate(&self, input: &str) -> bool;
}

/// Count leading whitespace characters of a line
pub(crate) fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Non-blank lines of the trimmed input
pub(crate) fn content_lines(input: &str) -> impl Iterator<Item = &str> {
    input.trim().lines().filter(|line| !line.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeId;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SyntaxError::FormatNotFound("dot".to_string()).to_string(),
            "Unknown syntax: dot"
        );
        assert_eq!(
            SyntaxError::CycleDetected { label: "A".to_string() }.to_string(),
            "Cycle detected at node 'A'"
        );
    }

    #[test]
    fn test_graph_error_converts() {
        let id = NodeId::new();
        let err: SyntaxError = GraphError::NodeNotFound(id).into();
        assert_eq!(err, SyntaxError::Graph(GraphError::NodeNotFound(id)));
    }

    #[test]
    fn test_leading_whitespace_counts_chars() {
        assert_eq!(leading_whitespace("A"), 0);
        assert_eq!(leading_whitespace("    B"), 4);
        assert_eq!(leading_whitespace("\t\tC"), 2);
    }

    #[test]
    fn test_content_lines_skips_blanks() {
        let lines: Vec<&str> = content_lines("\n\nA\n\n   \nB\r\nC\n").collect();
        assert_eq!(lines, vec!["A", "B", "C"]);
    }
}
