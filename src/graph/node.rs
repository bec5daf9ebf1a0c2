//! Node implementation for the graph model
//!
//! A node carries a display label, an open type tag, open properties and a
//! position. Identity is the generated [`NodeId`]; label and properties never
//! take part in equality.

use super::position::Position;
use super::property::{PropertyMap, PropertyValue};
use super::types::{NodeId, NodeType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A node in the graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node
    #[serde(default)]
    pub id: NodeId,

    /// Display label (not required to be unique)
    pub label: String,

    /// Type tag (open vocabulary)
    #[serde(default)]
    pub node_type: NodeType,

    /// Properties associated with this node
    #[serde(default)]
    pub properties: PropertyMap,

    /// Position used by external rendering layers
    #[serde(default)]
    pub position: Position,
}

impl Node {
    /// Create a new node of type `"default"`
    pub fn new(label: impl Into<String>) -> Self {
        Node {
            id: NodeId::new(),
            label: label.into(),
            node_type: NodeType::default(),
            properties: PropertyMap::new(),
            position: Position::default(),
        }
    }

    /// Create a new node with an explicit type
    pub fn with_type(label: impl Into<String>, node_type: impl Into<NodeType>) -> Self {
        let mut node = Node::new(label);
        node.node_type = node_type.into();
        node
    }

    /// Create a new node with type and properties
    pub fn new_with_properties(
        label: impl Into<String>,
        node_type: impl Into<NodeType>,
        properties: PropertyMap,
    ) -> Self {
        let mut node = Node::with_type(label, node_type);
        node.properties = properties;
        node
    }

    /// Set the position, consuming and returning the node
    pub fn at(mut self, position: impl Into<Position>) -> Self {
        self.position = position.into();
        self
    }

    /// Set a property value
    pub fn set_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.properties.insert(key.into(), value.into())
    }

    /// Get a property value
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Remove a property
    pub fn remove_property(&mut self, key: &str) -> Option<PropertyValue> {
        self.properties.shift_remove(key)
    }

    /// Check if property exists
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Get number of properties
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node(id={}, label='{}', type='{}')",
            self.id, self.label, self.node_type
        )
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_node() {
        let node = Node::new("Start");
        assert_eq!(node.label, "Start");
        assert_eq!(node.node_type.as_str(), "default");
        assert_eq!(node.position, Position::default());
        assert_eq!(node.property_count(), 0);
    }

    #[test]
    fn test_node_with_type_and_position() {
        let node = Node::with_type("Review", "task").at((200.0, 150.0));
        assert_eq!(node.node_type.as_str(), "task");
        assert_eq!(node.position, Position::new(200.0, 150.0));
    }

    #[test]
    fn test_node_properties() {
        let mut node = Node::new("A");

        node.set_property("name", "A");
        node.set_property("level", 0i64);
        assert_eq!(node.get_property("name").unwrap().as_string(), Some("A"));
        assert_eq!(node.get_property("level").unwrap().as_integer(), Some(0));
        assert_eq!(node.property_count(), 2);

        let removed = node.remove_property("level");
        assert!(removed.is_some());
        assert!(!node.has_property("level"));
    }

    #[test]
    fn test_equality_is_by_id_only() {
        let a = Node::new("Same");
        let b = Node::new("Same");
        assert_ne!(a, b);

        let mut renamed = a.clone();
        renamed.label = "Other".to_string();
        renamed.set_property("k", "v");
        assert_eq!(a, renamed);
    }

    #[test]
    fn test_serialization_shape() {
        let mut node = Node::with_type("CEO", "executive").at((300.0, 50.0));
        node.set_property("name", "CEO");

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            json!({
                "id": node.id.to_string(),
                "label": "CEO",
                "node_type": "executive",
                "properties": {"name": "CEO"},
                "position": {"x": 300.0, "y": 50.0}
            })
        );
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let node: Node = serde_json::from_value(json!({"label": "Lonely"})).unwrap();
        assert_eq!(node.label, "Lonely");
        assert_eq!(node.node_type.as_str(), "default");
        assert_eq!(node.position, Position::default());
    }
}
