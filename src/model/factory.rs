//! Programmatic creation of graphs, nodes and edges

use crate::graph::{
    Edge, EventData, Graph, GraphId, ModelEvent, ModelObserver, ModelSubject, NewEdge, Node,
    PropertyMap,
};
use serde_json::json;
use std::sync::Arc;

pub const SUPPORTED_NODE_TYPES: [&str; 3] = ["default", "process", "hierarchy"];
pub const SUPPORTED_EDGE_TYPES: [&str; 3] = ["default", "process_flow", "parent_child"];

/// Optional settings for [`GraphFactory::create_edge`]
#[derive(Debug, Clone)]
pub struct EdgeOptions {
    pub directed: bool,
    pub label: String,
    pub properties: PropertyMap,
}

impl Default for EdgeOptions {
    fn default() -> Self {
        EdgeOptions {
            directed: true,
            label: String::new(),
            properties: PropertyMap::new(),
        }
    }
}

/// Named factory that announces each graph it creates
#[derive(Debug)]
pub struct GraphFactory {
    name: String,
    events: ModelSubject,
}

impl GraphFactory {
    pub fn new(name: impl Into<String>) -> Self {
        GraphFactory {
            name: name.into(),
            events: ModelSubject::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attach_observer(&mut self, observer: Arc<dyn ModelObserver>) -> bool {
        self.events.attach(observer)
    }

    pub fn detach_observer(&mut self, observer: &Arc<dyn ModelObserver>) -> bool {
        self.events.detach(observer)
    }

    /// Create a directed graph and emit [`ModelEvent::GraphLoaded`]
    ///
    /// Kind `"default"` is seeded with `Node A -> Node B`; other kinds start
    /// empty. Without a name the graph is called `"<kind> graph"`.
    pub fn create_graph(&self, kind: &str, id: Option<&str>, name: Option<&str>) -> Graph {
        let id = id.map(GraphId::from).unwrap_or_else(GraphId::random);
        let name = name.map_or_else(|| format!("{} graph", kind), str::to_string);
        let mut graph = Graph::with_id(id, name);

        if kind == "default" {
            let a = Node::with_type("Node A", "default");
            let b = Node::with_type("Node B", "default");
            graph.add_edge(Edge::between(&a, &b, "default"));
        }

        if self.events.has_observers() {
            let mut data = EventData::new();
            data.insert("graph_id".to_string(), json!(graph.id));
            data.insert("factory".to_string(), json!(self.name));
            data.insert("graph".to_string(), graph.to_json());
            self.events.notify(ModelEvent::GraphLoaded, &data);
        }
        graph
    }

    pub fn create_node(&self, node_type: &str, label: &str, properties: PropertyMap) -> Node {
        Node::new_with_properties(label, node_type, properties)
    }

    /// Create an edge between two nodes; nothing is added to any graph
    pub fn create_edge(
        &self,
        source: &Node,
        target: &Node,
        edge_type: &str,
        options: EdgeOptions,
    ) -> NewEdge {
        Edge::between(source, target, edge_type)
            .with_directed(options.directed)
            .with_label(options.label)
            .with_properties(options.properties)
    }

    pub fn supported_node_types(&self) -> Vec<String> {
        SUPPORTED_NODE_TYPES.iter().map(|s| s.to_string()).collect()
    }

    pub fn supported_edge_types(&self) -> Vec<String> {
        SUPPORTED_EDGE_TYPES.iter().map(|s| s.to_string()).collect()
    }

    pub fn has_node_type(&self, node_type: &str) -> bool {
        SUPPORTED_NODE_TYPES.contains(&node_type)
    }

    pub fn has_edge_type(&self, edge_type: &str) -> bool {
        SUPPORTED_EDGE_TYPES.contains(&edge_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Loaded(Mutex<Vec<String>>);

    impl ModelObserver for Loaded {
        fn on_model_changed(&self, event: ModelEvent, data: &EventData) {
            assert_eq!(event, ModelEvent::GraphLoaded);
            let id = data["graph_id"].as_str().unwrap_or_default().to_string();
            self.0.lock().unwrap().push(id);
        }
    }

    #[test]
    fn test_default_graph_is_seeded() {
        let factory = GraphFactory::new("main");
        let graph = factory.create_graph("default", Some("g1"), None);

        assert_eq!(graph.id.as_str(), "g1");
        assert_eq!(graph.name, "default graph");
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.find_node_by_label("Node A").is_some());
    }

    #[test]
    fn test_other_kinds_start_empty() {
        let factory = GraphFactory::new("main");
        let graph = factory.create_graph("process", None, Some("Flow"));
        assert_eq!(graph.name, "Flow");
        assert_eq!(graph.node_count(), 0);
        assert!(!graph.id.as_str().is_empty());
    }

    #[test]
    fn test_create_graph_notifies() {
        let loaded = Arc::new(Loaded::default());
        let mut factory = GraphFactory::new("main");
        factory.attach_observer(loaded.clone());

        factory.create_graph("default", Some("g1"), None);
        factory.create_graph("hierarchy", Some("g2"), None);
        assert_eq!(*loaded.0.lock().unwrap(), vec!["g1", "g2"]);
    }

    #[test]
    fn test_create_node_and_edge() {
        let factory = GraphFactory::new("main");
        let mut props = PropertyMap::new();
        props.insert("owner".to_string(), "ops".into());

        let a = factory.create_node("process", "Step 1", props);
        let b = factory.create_node("process", "Step 2", PropertyMap::new());
        assert_eq!(a.node_type.as_str(), "process");
        assert!(a.has_property("owner"));

        let options = EdgeOptions {
            directed: false,
            label: "then".to_string(),
            ..EdgeOptions::default()
        };
        let new_edge = factory.create_edge(&a, &b, "process_flow", options);
        assert_eq!(new_edge.edge().label, "then");
        assert!(!new_edge.edge().directed);

        let mut graph = Graph::new("g");
        graph.add_edge(new_edge);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_supported_types() {
        let factory = GraphFactory::new("main");
        assert_eq!(factory.name(), "main");
        assert!(factory.has_node_type("hierarchy"));
        assert!(!factory.has_node_type("task"));
        assert!(factory.has_edge_type("parent_child"));
        assert_eq!(factory.supported_edge_types().len(), 3);
        assert_eq!(factory.supported_node_types()[0], "default");
    }
}
