//! syntaxgraph
//!
//! An in-memory graph model with converters to and from plain-text
//! notations, plus a small HTTP API and CLI around them.
//!
//! # Architecture
//!
//! - `graph`: nodes, edges and graphs, with change notifications
//! - `syntax`: the adapter contract, the built-in notations and the registry
//! - `model`: named graphs with a current selection, and a graph factory
//! - `http`: axum routes over the model manager and registry
//! - `config`: server configuration from YAML and the environment
//!
//! # Notations
//!
//! - `basic_graph`: one `A -> B` pair per line
//! - `process`: the same grammar, typed as process steps and flows
//! - `hierarchy`: a tree written with two-space indentation
//!
//! ## Example Usage
//!
//! ```rust
//! use syntaxgraph::SyntaxRegistry;
//!
//! let registry = SyntaxRegistry::with_builtin();
//!
//! let graph = registry.parse("hierarchy", "CEO\n  CTO\n  CFO").unwrap();
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//!
//! let text = registry.export("basic_graph", &graph).unwrap();
//! assert_eq!(text, "CEO -> CTO\nCEO -> CFO");
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod graph;
pub mod http;
pub mod model;
pub mod syntax;

// Re-export main types for convenience
pub use graph::{
    Edge, EdgeId, EdgeType, Graph, GraphBuilder, GraphError, GraphId, GraphResult, ModelEvent,
    ModelObserver, ModelSubject, NewEdge, Node, NodeId, NodeType, Position, PropertyMap,
    PropertyValue,
};

pub use syntax::{
    ArrowListAdapter, HierarchyAdapter, SyntaxAdapter, SyntaxError, SyntaxRegistry,
    SyntaxResult,
};

pub use model::{GraphFactory, ModelManager, SystemStatus};

pub use config::{ConfigError, ServerConfig};

pub use http::{AppState, HttpServer};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "1.0.0");
    }
}
