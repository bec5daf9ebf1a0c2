//! Edge implementation for the graph model
//!
//! Edges reference their endpoints by [`NodeId`]; the owning graph holds the
//! nodes. A freshly constructed edge is a [`NewEdge`], which also carries
//! copies of both endpoints so the graph can insert any that are missing.

use super::node::Node;
use super::property::{PropertyMap, PropertyValue};
use super::types::{EdgeId, EdgeType, NodeId};
use serde::{Deserialize, Serialize};
use std::fmt;

fn default_directed() -> bool {
    true
}

/// An edge stored in a graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier for this edge
    #[serde(default)]
    pub id: EdgeId,

    /// Source node (edge goes FROM this node)
    #[serde(rename = "source_id")]
    pub source: NodeId,

    /// Target node (edge goes TO this node)
    #[serde(rename = "target_id")]
    pub target: NodeId,

    /// Type of relationship (e.g., "basic", "parent_child")
    #[serde(default)]
    pub edge_type: EdgeType,

    /// Edge-local directedness, independent of the graph flag
    #[serde(default = "default_directed")]
    pub directed: bool,

    /// Display label
    #[serde(default)]
    pub label: String,

    /// Properties associated with this edge
    #[serde(default)]
    pub properties: PropertyMap,
}

impl Edge {
    /// Create a new directed edge between two node ids
    pub fn new(source: NodeId, target: NodeId, edge_type: impl Into<EdgeType>) -> Self {
        Edge {
            id: EdgeId::new(),
            source,
            target,
            edge_type: edge_type.into(),
            directed: true,
            label: String::new(),
            properties: PropertyMap::new(),
        }
    }

    /// Create a detached edge that remembers both endpoints
    ///
    /// Nothing happens to any graph until the result is passed to
    /// [`Graph::add_edge`](super::Graph::add_edge).
    pub fn between(source: &Node, target: &Node, edge_type: impl Into<EdgeType>) -> NewEdge {
        NewEdge {
            edge: Edge::new(source.id, target.id, edge_type),
            source: source.clone(),
            target: target.clone(),
        }
    }

    /// Set a property value
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Get a property value
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Check if this edge touches a node as source or target
    pub fn touches(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }

    /// Check if this edge goes FROM a specific node
    pub fn starts_from(&self, node: NodeId) -> bool {
        self.source == node
    }

    /// Check if this edge goes TO a specific node
    pub fn ends_at(&self, node: NodeId) -> bool {
        self.target == node
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.directed { "->" } else { "--" };
        write!(f, "Edge({} {} {})", self.source, arrow, self.target)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// An edge that has been constructed but not yet added to a graph
#[derive(Debug, Clone)]
pub struct NewEdge {
    pub(super) edge: Edge,
    pub(super) source: Node,
    pub(super) target: Node,
}

impl NewEdge {
    /// Identifier the edge will keep once added
    pub fn id(&self) -> EdgeId {
        self.edge.id
    }

    pub fn edge(&self) -> &Edge {
        &self.edge
    }

    pub fn source(&self) -> &Node {
        &self.source
    }

    pub fn target(&self) -> &Node {
        &self.target
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.edge.label = label.into();
        self
    }

    pub fn with_directed(mut self, directed: bool) -> Self {
        self.edge.directed = directed;
        self
    }

    pub fn with_properties(mut self, properties: PropertyMap) -> Self {
        self.edge.properties = properties;
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.edge.set_property(key, value);
        self
    }

    /// Split into the edge and its two endpoint copies
    pub fn into_parts(self) -> (Edge, Node, Node) {
        (self.edge, self.source, self.target)
    }
}
