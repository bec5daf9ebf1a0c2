//! Change notifications for the model and view layers
//!
//! Two independent fan-out relations:
//! - model subjects notify [`ModelObserver`]s of [`ModelEvent`]s
//! - controller subjects notify [`ViewObserver`]s of named view actions
//!
//! Delivery is synchronous, on the calling thread, in attachment order.
//! There is no queue and missed events are not replayed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Free-form event payload
pub type EventData = serde_json::Map<String, serde_json::Value>;

/// Kinds of changes in the model layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelEvent {
    NodeAdded,
    NodeRemoved,
    NodeUpdated,
    EdgeAdded,
    EdgeRemoved,
    EdgeUpdated,
    GraphCleared,
    GraphLoaded,
    ModelCreated,
    ModelRemoved,
    ModelSwitched,
}

impl ModelEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelEvent::NodeAdded => "node_added",
            ModelEvent::NodeRemoved => "node_removed",
            ModelEvent::NodeUpdated => "node_updated",
            ModelEvent::EdgeAdded => "edge_added",
            ModelEvent::EdgeRemoved => "edge_removed",
            ModelEvent::EdgeUpdated => "edge_updated",
            ModelEvent::GraphCleared => "graph_cleared",
            ModelEvent::GraphLoaded => "graph_loaded",
            ModelEvent::ModelCreated => "model_created",
            ModelEvent::ModelRemoved => "model_removed",
            ModelEvent::ModelSwitched => "model_switched",
        }
    }
}

impl fmt::Display for ModelEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives model change notifications
pub trait ModelObserver: Send + Sync {
    fn on_model_changed(&self, event: ModelEvent, data: &EventData);
}

/// Receives actions performed in a view (zoom, filter, select, ...)
pub trait ViewObserver: Send + Sync {
    fn on_view_action(&self, action: &str, parameters: &EventData);
}

/// Ordered, duplicate-free list of listeners compared by pointer identity
struct Listeners<T: ?Sized> {
    entries: Vec<Arc<T>>,
}

impl<T: ?Sized> Default for Listeners<T> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T: ?Sized> Listeners<T> {
    fn attach(&mut self, listener: Arc<T>) -> bool {
        if self.entries.iter().any(|l| Arc::ptr_eq(l, &listener)) {
            return false;
        }
        self.entries.push(listener);
        true
    }

    fn detach(&mut self, listener: &Arc<T>) -> bool {
        let before = self.entries.len();
        self.entries.retain(|l| !Arc::ptr_eq(l, listener));
        self.entries.len() != before
    }
}

/// Holder of model observers
///
/// Cloning a subject yields an empty one: observers belong to the instance
/// they were attached to.
#[derive(Default)]
pub struct ModelSubject {
    observers: Listeners<dyn ModelObserver>,
}

impl ModelSubject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an observer; attaching the same one twice has no effect
    pub fn attach(&mut self, observer: Arc<dyn ModelObserver>) -> bool {
        self.observers.attach(observer)
    }

    /// Detach an observer; no-op if it was never attached
    pub fn detach(&mut self, observer: &Arc<dyn ModelObserver>) -> bool {
        self.observers.detach(observer)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.entries.len()
    }

    pub fn has_observers(&self) -> bool {
        self.observer_count() > 0
    }

    /// Invoke every attached observer once, in attachment order
    pub fn notify(&self, event: ModelEvent, data: &EventData) {
        for observer in &self.observers.entries {
            observer.on_model_changed(event, data);
        }
    }
}

impl Clone for ModelSubject {
    fn clone(&self) -> Self {
        ModelSubject::new()
    }
}

impl fmt::Debug for ModelSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelSubject")
            .field("observers", &self.observer_count())
            .finish()
    }
}

/// Holder of view observers, owned by a controller
#[derive(Default)]
pub struct ControllerSubject {
    observers: Listeners<dyn ViewObserver>,
}

impl ControllerSubject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, observer: Arc<dyn ViewObserver>) -> bool {
        self.observers.attach(observer)
    }

    pub fn detach(&mut self, observer: &Arc<dyn ViewObserver>) -> bool {
        self.observers.detach(observer)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.entries.len()
    }

    pub fn notify(&self, action: &str, parameters: &EventData) {
        for observer in &self.observers.entries {
            observer.on_view_action(action, parameters);
        }
    }
}

impl fmt::Debug for ControllerSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerSubject")
            .field("observers", &self.observer_count())
            .finish()
    }
}

/// Observer that logs every model change
#[derive(Debug, Clone)]
pub struct LoggingObserver {
    name: String,
}

impl LoggingObserver {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new("syntaxgraph")
    }
}

impl ModelObserver for LoggingObserver {
    fn on_model_changed(&self, event: ModelEvent, data: &EventData) {
        info!(observer = %self.name, event = %event, data = ?data, "Model event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        tag: &'static str,
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl ModelObserver for Recorder {
        fn on_model_changed(&self, event: ModelEvent, _data: &EventData) {
            self.seen.lock().unwrap().push(format!("{}:{}", self.tag, event));
        }
    }

    impl ViewObserver for Recorder {
        fn on_view_action(&self, action: &str, parameters: &EventData) {
            self.seen
                .lock()
                .unwrap()
                .push(format!("{}:{}:{}", self.tag, action, parameters.len()));
        }
    }

    #[test]
    fn test_event_names() {
        assert_eq!(ModelEvent::NodeAdded.as_str(), "node_added");
        assert_eq!(ModelEvent::ModelSwitched.to_string(), "model_switched");
        assert_eq!(
            serde_json::to_value(ModelEvent::GraphCleared).unwrap(),
            serde_json::json!("graph_cleared")
        );
    }

    #[test]
    fn test_attach_is_idempotent() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let observer: Arc<dyn ModelObserver> = Arc::new(Recorder { tag: "a", seen: seen.clone() });

        let mut subject = ModelSubject::new();
        assert!(subject.attach(observer.clone()));
        assert!(!subject.attach(observer.clone()));
        assert_eq!(subject.observer_count(), 1);

        subject.notify(ModelEvent::NodeAdded, &EventData::new());
        assert_eq!(*seen.lock().unwrap(), vec!["a:node_added"]);
    }

    #[test]
    fn test_notify_in_attachment_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let first: Arc<dyn ModelObserver> = Arc::new(Recorder { tag: "first", seen: seen.clone() });
        let second: Arc<dyn ModelObserver> = Arc::new(Recorder { tag: "second", seen: seen.clone() });

        let mut subject = ModelSubject::new();
        subject.attach(first);
        subject.attach(second);
        subject.notify(ModelEvent::EdgeRemoved, &EventData::new());

        assert_eq!(*seen.lock().unwrap(), vec!["first:edge_removed", "second:edge_removed"]);
    }

    #[test]
    fn test_detach_unknown_is_noop() {
        let observer: Arc<dyn ModelObserver> = Arc::new(Recorder::default());
        let mut subject = ModelSubject::new();
        assert!(!subject.detach(&observer));

        subject.attach(observer.clone());
        assert!(subject.detach(&observer));
        assert!(!subject.detach(&observer));
        assert!(!subject.has_observers());
    }

    #[test]
    fn test_clone_drops_observers() {
        let mut subject = ModelSubject::new();
        subject.attach(Arc::new(Recorder::default()));
        assert_eq!(subject.clone().observer_count(), 0);
    }

    #[test]
    fn test_controller_subject_fans_out_actions() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let view: Arc<dyn ViewObserver> = Arc::new(Recorder { tag: "view", seen: seen.clone() });

        let mut controller = ControllerSubject::new();
        controller.attach(view.clone());
        controller.attach(view.clone());

        let mut params = EventData::new();
        params.insert("level".to_string(), serde_json::json!(2));
        controller.notify("zoom", &params);
        assert_eq!(*seen.lock().unwrap(), vec!["view:zoom:1"]);

        controller.detach(&view);
        controller.notify("zoom", &params);
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_logging_observer_accepts_events() {
        let observer = LoggingObserver::new("test");
        assert_eq!(observer.name(), "test");
        observer.on_model_changed(ModelEvent::GraphLoaded, &EventData::new());
    }
}
