//! In-memory graph model
//!
//! This module implements the graph data model shared by every notation:
//! - Nodes with a label, open type tag, properties and a position
//! - Edges referencing their endpoints by id, with per-edge directedness
//! - A graph that owns both collections and keeps them consistent
//! - Change notifications for observers of the model

pub mod builder;
pub mod edge;
pub mod event;
pub mod node;
pub mod position;
pub mod property;
pub mod store;
pub mod types;

// Re-export main types
pub use builder::GraphBuilder;
pub use edge::{Edge, NewEdge};
pub use event::{
    ControllerSubject, EventData, LoggingObserver, ModelEvent, ModelObserver, ModelSubject,
    ViewObserver,
};
pub use node::Node;
pub use position::Position;
pub use property::{PropertyMap, PropertyValue};
pub use store::{Graph, GraphError, GraphResult};
pub use types::{EdgeId, EdgeType, GraphId, NodeId, NodeType};
