//! Named graphs with a current selection
//!
//! The manager owns every stored graph. Changes to the set of graphs or to
//! the selection are announced to attached observers; the seeded samples
//! are inserted silently.

use super::samples;
use crate::graph::{EventData, Graph, ModelEvent, ModelObserver, ModelSubject};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Sample keys, one per notation family
pub const SAMPLE_SYNTAXES: [&str; 3] = ["basic", "process", "hierarchy"];

/// Per-model counts reported in [`SystemStatus`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfo {
    pub name: String,
    pub nodes: usize,
    pub edges: usize,
}

/// Summary of the manager's contents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemStatus {
    pub total_models: usize,
    pub current_model: Option<String>,
    pub available_syntaxes: Vec<String>,
    pub models_info: IndexMap<String, ModelInfo>,
}

/// Store of graphs keyed by graph id
#[derive(Debug, Default)]
pub struct ModelManager {
    models: IndexMap<String, Graph>,
    current: Option<String>,
    events: ModelSubject,
}

impl ModelManager {
    /// Create an empty manager with no selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager seeded with the sample graphs, `"basic"` selected
    pub fn with_samples() -> Self {
        let mut manager = Self::new();
        for graph in samples::all_samples() {
            manager.models.insert(graph.id.to_string(), graph);
        }
        manager.current = Some(SAMPLE_SYNTAXES[0].to_string());
        manager
    }

    pub fn attach_observer(&mut self, observer: Arc<dyn ModelObserver>) -> bool {
        self.events.attach(observer)
    }

    pub fn detach_observer(&mut self, observer: &Arc<dyn ModelObserver>) -> bool {
        self.events.detach(observer)
    }

    fn emit(&self, event: ModelEvent, model_id: &str) {
        let mut data = EventData::new();
        data.insert("model_id".to_string(), json!(model_id));
        self.events.notify(event, &data);
    }

    /// Store a graph under its id and select it
    ///
    /// A graph with the same id replaces the stored one.
    pub fn add_model(&mut self, graph: Graph) -> String {
        let model_id = graph.id.to_string();
        info!(model = %model_id, name = %graph.name, "Adding model");
        self.models.insert(model_id.clone(), graph);
        self.current = Some(model_id.clone());
        self.emit(ModelEvent::ModelCreated, &model_id);
        model_id
    }

    pub fn get_model(&self, model_id: &str) -> Option<&Graph> {
        self.models.get(model_id)
    }

    pub fn get_model_mut(&mut self, model_id: &str) -> Option<&mut Graph> {
        self.models.get_mut(model_id)
    }

    /// The selected graph, if any
    pub fn get_current_model(&self) -> Option<&Graph> {
        self.current.as_deref().and_then(|id| self.models.get(id))
    }

    pub fn current_model_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Stored ids in insertion order
    pub fn list_models(&self) -> Vec<String> {
        self.models.keys().cloned().collect()
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// Remove a graph; clears the selection if it was selected
    pub fn remove_model(&mut self, model_id: &str) -> bool {
        if self.models.shift_remove(model_id).is_none() {
            return false;
        }
        if self.current.as_deref() == Some(model_id) {
            self.current = None;
        }
        info!(model = %model_id, "Removed model");
        self.emit(ModelEvent::ModelRemoved, model_id);
        true
    }

    /// Select a stored graph; unknown ids leave the selection unchanged
    pub fn set_current_model(&mut self, model_id: &str) -> bool {
        if !self.models.contains_key(model_id) {
            return false;
        }
        self.current = Some(model_id.to_string());
        self.emit(ModelEvent::ModelSwitched, model_id);
        true
    }

    /// Graph stored under a sample key such as `"process"`
    pub fn get_model_by_syntax(&self, syntax: &str) -> Option<&Graph> {
        self.models.get(syntax)
    }

    pub fn all_syntaxes(&self) -> Vec<String> {
        SAMPLE_SYNTAXES.iter().map(|s| s.to_string()).collect()
    }

    pub fn system_status(&self) -> SystemStatus {
        SystemStatus {
            total_models: self.models.len(),
            current_model: self.current.clone(),
            available_syntaxes: self.all_syntaxes(),
            models_info: self
                .models
                .iter()
                .map(|(id, graph)| {
                    (
                        id.clone(),
                        ModelInfo {
                            name: graph.name.clone(),
                            nodes: graph.node_count(),
                            edges: graph.edge_count(),
                        },
                    )
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Seen(Mutex<Vec<(ModelEvent, String)>>);

    impl ModelObserver for Seen {
        fn on_model_changed(&self, event: ModelEvent, data: &EventData) {
            let id = data["model_id"].as_str().unwrap_or_default().to_string();
            self.0.lock().unwrap().push((event, id));
        }
    }

    #[test]
    fn test_samples_seeded_silently() {
        let manager = ModelManager::with_samples();
        assert_eq!(manager.list_models(), vec!["basic", "process", "hierarchy"]);
        assert_eq!(manager.current_model_id(), Some("basic"));
        assert_eq!(manager.get_current_model().unwrap().name, "Basic Graph Example");
    }

    #[test]
    fn test_empty_manager() {
        let manager = ModelManager::new();
        assert!(manager.get_current_model().is_none());
        assert_eq!(manager.model_count(), 0);
    }

    #[test]
    fn test_add_model_selects_and_notifies() {
        let seen = Arc::new(Seen::default());
        let mut manager = ModelManager::with_samples();
        manager.attach_observer(seen.clone());

        let id = manager.add_model(Graph::with_id("custom", "Custom"));
        assert_eq!(id, "custom");
        assert_eq!(manager.current_model_id(), Some("custom"));
        assert_eq!(
            *seen.0.lock().unwrap(),
            vec![(ModelEvent::ModelCreated, "custom".to_string())]
        );
    }

    #[test]
    fn test_remove_current_clears_selection() {
        let seen = Arc::new(Seen::default());
        let mut manager = ModelManager::with_samples();
        manager.attach_observer(seen.clone());

        assert!(manager.remove_model("basic"));
        assert!(manager.current_model_id().is_none());
        assert!(!manager.remove_model("basic"));
        assert_eq!(seen.0.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_remove_other_keeps_selection() {
        let mut manager = ModelManager::with_samples();
        assert!(manager.remove_model("process"));
        assert_eq!(manager.current_model_id(), Some("basic"));
    }

    #[test]
    fn test_set_current_model() {
        let seen = Arc::new(Seen::default());
        let mut manager = ModelManager::with_samples();
        manager.attach_observer(seen.clone());

        assert!(manager.set_current_model("hierarchy"));
        assert!(!manager.set_current_model("missing"));
        assert_eq!(manager.current_model_id(), Some("hierarchy"));
        assert_eq!(
            *seen.0.lock().unwrap(),
            vec![(ModelEvent::ModelSwitched, "hierarchy".to_string())]
        );
    }

    #[test]
    fn test_get_model_mut_edits_in_place() {
        let mut manager = ModelManager::with_samples();
        manager.get_model_mut("basic").unwrap().clear();
        assert_eq!(manager.get_model_by_syntax("basic").unwrap().node_count(), 0);
    }

    #[test]
    fn test_system_status() {
        let manager = ModelManager::with_samples();
        let status = manager.system_status();

        assert_eq!(status.total_models, 3);
        assert_eq!(status.current_model.as_deref(), Some("basic"));
        assert_eq!(status.available_syntaxes, vec!["basic", "process", "hierarchy"]);
        assert_eq!(
            status.models_info["hierarchy"],
            ModelInfo {
                name: "Organization Hierarchy Example".to_string(),
                nodes: 9,
                edges: 8
            }
        );

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["models_info"]["process"]["edges"], 6);
    }
}
