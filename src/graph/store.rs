//! In-memory graph implementation
//!
//! The graph owns every node and edge. Nodes and edges are kept in insertion
//! order and are duplicate-free by identifier; edges reference nodes by id.
//! Membership checks are linear scans, which is fine at the sizes the text
//! notations produce.

use super::edge::{Edge, NewEdge};
use super::event::{EventData, ModelEvent, ModelObserver, ModelSubject};
use super::node::Node;
use super::property::PropertyMap;
use super::types::{EdgeId, GraphId, NodeId};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    #[error("Edge {0} not found")]
    EdgeNotFound(EdgeId),

    #[error("Node {0} appears more than once")]
    DuplicateNode(NodeId),

    #[error("Edge {0} appears more than once")]
    DuplicateEdge(EdgeId),

    #[error("Edge {edge} references node {node} which is not in the graph")]
    DanglingEdge { edge: EdgeId, node: NodeId },

    #[error("Invalid graph snapshot: {0}")]
    Snapshot(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// A graph of nodes and edges with a directedness flag and identity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GraphSnapshot")]
pub struct Graph {
    /// Graph identifier
    pub id: GraphId,

    /// Display name
    pub name: String,

    /// Graph-level directedness; neighbour lookups follow this flag
    pub directed: bool,

    nodes: Vec<Node>,

    edges: Vec<Edge>,

    /// Open graph-level properties
    pub properties: PropertyMap,

    #[serde(skip)]
    events: ModelSubject,
}

/// Unchecked wire form of a graph, validated on the way in
#[derive(Deserialize)]
struct GraphSnapshot {
    #[serde(default = "GraphId::random")]
    id: GraphId,
    #[serde(default = "default_graph_name")]
    name: String,
    #[serde(default = "default_directed")]
    directed: bool,
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default)]
    edges: Vec<Edge>,
    #[serde(default)]
    properties: PropertyMap,
}

fn default_graph_name() -> String {
    "Graph".to_string()
}

fn default_directed() -> bool {
    true
}

impl TryFrom<GraphSnapshot> for Graph {
    type Error = GraphError;

    fn try_from(snapshot: GraphSnapshot) -> GraphResult<Self> {
        let mut node_ids = HashSet::with_capacity(snapshot.nodes.len());
        for node in &snapshot.nodes {
            if !node_ids.insert(node.id) {
                return Err(GraphError::DuplicateNode(node.id));
            }
        }

        let mut edge_ids = HashSet::with_capacity(snapshot.edges.len());
        for edge in &snapshot.edges {
            if !edge_ids.insert(edge.id) {
                return Err(GraphError::DuplicateEdge(edge.id));
            }
            for endpoint in [edge.source, edge.target] {
                if !node_ids.contains(&endpoint) {
                    return Err(GraphError::DanglingEdge {
                        edge: edge.id,
                        node: endpoint,
                    });
                }
            }
        }

        Ok(Graph {
            id: snapshot.id,
            name: snapshot.name,
            directed: snapshot.directed,
            nodes: snapshot.nodes,
            edges: snapshot.edges,
            properties: snapshot.properties,
            events: ModelSubject::new(),
        })
    }
}

impl Graph {
    /// Create a new empty directed graph
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(GraphId::random(), name)
    }

    /// Create a new empty directed graph with a chosen identifier
    pub fn with_id(id: impl Into<GraphId>, name: impl Into<String>) -> Self {
        Graph {
            id: id.into(),
            name: name.into(),
            directed: true,
            nodes: Vec::new(),
            edges: Vec::new(),
            properties: PropertyMap::new(),
            events: ModelSubject::new(),
        }
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Attach an observer that receives this graph's change events
    pub fn attach_observer(&mut self, observer: Arc<dyn ModelObserver>) -> bool {
        self.events.attach(observer)
    }

    pub fn detach_observer(&mut self, observer: &Arc<dyn ModelObserver>) -> bool {
        self.events.detach(observer)
    }

    fn emit(&self, event: ModelEvent, payload: serde_json::Value) {
        if !self.events.has_observers() {
            return;
        }
        let mut data = EventData::new();
        data.insert("graph_id".to_string(), json!(self.id));
        if let serde_json::Value::Object(extra) = payload {
            data.extend(extra);
        }
        self.events.notify(event, &data);
    }

    /// Check if a node with this id is in the graph
    pub fn has_node(&self, id: NodeId) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// Check if an edge with this id is in the graph
    pub fn has_edge(&self, id: EdgeId) -> bool {
        self.edges.iter().any(|e| e.id == id)
    }

    /// Add a node; adding a node that is already present does nothing
    ///
    /// Returns whether the node was inserted.
    pub fn add_node(&mut self, node: Node) -> bool {
        if self.has_node(node.id) {
            return false;
        }
        let payload = json!({ "node_id": node.id, "label": node.label });
        self.nodes.push(node);
        self.emit(ModelEvent::NodeAdded, payload);
        true
    }

    /// Remove a node and every edge touching it
    ///
    /// Returns the removed node, or `None` if it was not in the graph.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        let idx = self.nodes.iter().position(|n| n.id == id)?;

        let (removed_edges, kept): (Vec<Edge>, Vec<Edge>) =
            std::mem::take(&mut self.edges).into_iter().partition(|e| e.touches(id));
        self.edges = kept;
        let node = self.nodes.remove(idx);

        for edge in &removed_edges {
            self.emit(ModelEvent::EdgeRemoved, json!({ "edge_id": edge.id }));
        }
        self.emit(
            ModelEvent::NodeRemoved,
            json!({ "node_id": node.id, "label": node.label, "edges_removed": removed_edges.len() }),
        );
        Some(node)
    }

    /// Add an edge, inserting any missing endpoint first
    ///
    /// Endpoints already present keep their stored data. Adding an edge that
    /// is already present does nothing. Returns whether the edge was inserted.
    pub fn add_edge(&mut self, new_edge: NewEdge) -> bool {
        let (edge, source, target) = new_edge.into_parts();
        self.add_node(source);
        self.add_node(target);

        if self.has_edge(edge.id) {
            return false;
        }
        let payload = json!({
            "edge_id": edge.id,
            "source_id": edge.source,
            "target_id": edge.target,
        });
        self.edges.push(edge);
        self.emit(ModelEvent::EdgeAdded, payload);
        true
    }

    /// Remove an edge; returns `None` if it was not in the graph
    pub fn remove_edge(&mut self, id: EdgeId) -> Option<Edge> {
        let idx = self.edges.iter().position(|e| e.id == id)?;
        let edge = self.edges.remove(idx);
        self.emit(ModelEvent::EdgeRemoved, json!({ "edge_id": edge.id }));
        Some(edge)
    }

    /// Edit a node in place; its identifier cannot change
    pub fn update_node<F>(&mut self, id: NodeId, update: F) -> GraphResult<()>
    where
        F: FnOnce(&mut Node),
    {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(GraphError::NodeNotFound(id))?;
        update(node);
        node.id = id;
        let payload = json!({ "node_id": id, "label": node.label });
        self.emit(ModelEvent::NodeUpdated, payload);
        Ok(())
    }

    /// Edit an edge in place; its identifier and endpoints cannot change
    pub fn update_edge<F>(&mut self, id: EdgeId, update: F) -> GraphResult<()>
    where
        F: FnOnce(&mut Edge),
    {
        let edge = self
            .edges
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(GraphError::EdgeNotFound(id))?;
        let (source, target) = (edge.source, edge.target);
        update(edge);
        edge.id = id;
        edge.source = source;
        edge.target = target;
        self.emit(ModelEvent::EdgeUpdated, json!({ "edge_id": id }));
        Ok(())
    }

    /// Get a node by id
    pub fn get_node_by_id(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Get an edge by id
    pub fn get_edge_by_id(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// First node (in insertion order) carrying this label
    pub fn find_node_by_label(&self, label: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.label == label)
    }

    /// Neighbouring nodes of `id`
    ///
    /// Directed graphs follow outgoing edges only; undirected graphs also
    /// follow incoming ones. Order follows edge insertion order and parallel
    /// edges yield repeated neighbours.
    pub fn get_neighbors(&self, id: NodeId) -> Vec<&Node> {
        self.edges
            .iter()
            .filter_map(|edge| {
                if edge.starts_from(id) {
                    Some(edge.target)
                } else if !self.directed && edge.ends_at(id) {
                    Some(edge.source)
                } else {
                    None
                }
            })
            .filter_map(|neighbor| self.get_node_by_id(neighbor))
            .collect()
    }

    /// Edges whose source is `id`, in insertion order
    pub fn outgoing_edges(&self, id: NodeId) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.starts_from(id))
    }

    /// Check if any edge points at `id`
    pub fn has_incoming(&self, id: NodeId) -> bool {
        self.edges.iter().any(|e| e.ends_at(id))
    }

    /// Get total number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get total number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Remove all nodes and edges, keeping id, name, directedness and properties
    pub fn clear(&mut self) {
        let payload = json!({ "nodes_removed": self.nodes.len(), "edges_removed": self.edges.len() });
        self.nodes.clear();
        self.edges.clear();
        self.emit(ModelEvent::GraphCleared, payload);
    }

    /// Structural snapshot of the graph as JSON
    pub fn to_json(&self) -> serde_json::Value {
        // Every field is a string, bool, number or map with string keys
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// Rebuild a graph from a snapshot produced by [`Graph::to_json`]
    pub fn from_json(value: serde_json::Value) -> GraphResult<Self> {
        let snapshot: GraphSnapshot =
            serde_json::from_value(value).map_err(|e| GraphError::Snapshot(e.to_string()))?;
        Graph::try_from(snapshot)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(default_graph_name())
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph(name='{}', nodes={}, edges={})",
            self.name,
            self.nodes.len(),
            self.edges.len()
        )
    }
}
