//! Name-keyed lookup of notations
//!
//! The registry is built once at startup and then shared read-only; it is
//! owned by whoever constructs it, never a global.

use super::{ArrowListAdapter, HierarchyAdapter, SyntaxAdapter, SyntaxError, SyntaxResult};
use crate::graph::Graph;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// Constructor for an adapter, attempted independently of the others
pub type AdapterFactory = fn() -> SyntaxResult<Arc<dyn SyntaxAdapter>>;

fn basic_graph_factory() -> SyntaxResult<Arc<dyn SyntaxAdapter>> {
    Ok(Arc::new(ArrowListAdapter::basic_graph()))
}

fn hierarchy_factory() -> SyntaxResult<Arc<dyn SyntaxAdapter>> {
    Ok(Arc::new(HierarchyAdapter::new()))
}

fn process_factory() -> SyntaxResult<Arc<dyn SyntaxAdapter>> {
    Ok(Arc::new(ArrowListAdapter::process()))
}

/// Built-in notations in registration order
pub const BUILTIN_FACTORIES: &[AdapterFactory] =
    &[basic_graph_factory, hierarchy_factory, process_factory];

/// Mapping from notation name to adapter
#[derive(Default, Clone)]
pub struct SyntaxRegistry {
    adapters: IndexMap<String, Arc<dyn SyntaxAdapter>>,
}

impl SyntaxRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in notation that initialises
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register_factories(BUILTIN_FACTORIES);
        registry
    }

    /// Run each factory and register what it yields
    ///
    /// A failing factory is logged and skipped; the rest still register.
    /// Returns how many adapters were registered.
    pub fn register_factories(&mut self, factories: &[AdapterFactory]) -> usize {
        let mut registered = 0;
        for factory in factories {
            match factory() {
                Ok(adapter) => {
                    self.register(adapter);
                    registered += 1;
                }
                Err(e) => warn!(error = %e, "Skipping syntax adapter"),
            }
        }
        registered
    }

    /// Register an adapter under its own name, replacing any previous one
    pub fn register(&mut self, adapter: Arc<dyn SyntaxAdapter>) {
        let name = adapter.name().to_string();
        info!(syntax = %name, version = %adapter.version(), "Registered syntax adapter");
        self.adapters.insert(name, adapter);
    }

    /// Look up an adapter by name
    pub fn get(&self, name: &str) -> SyntaxResult<Arc<dyn SyntaxAdapter>> {
        self.adapters
            .get(name)
            .cloned()
            .ok_or_else(|| SyntaxError::FormatNotFound(name.to_string()))
    }

    /// Registered names in registration order
    pub fn list_names(&self) -> Vec<String> {
        self.adapters.keys().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.adapters.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Parse text in the named notation
    pub fn parse(&self, format: &str, text: &str) -> SyntaxResult<Graph> {
        self.get(format)?.parse(text)
    }

    /// Export a graph in the named notation
    pub fn export(&self, format: &str, graph: &Graph) -> SyntaxResult<String> {
        self.get(format)?.export(graph)
    }

    /// Validate text in the named notation
    pub fn validate(&self, format: &str, text: &str) -> SyntaxResult<bool> {
        Ok(self.get(format)?.validate(text))
    }

    /// Parse text in one notation and export it in another
    pub fn convert(&self, from: &str, to: &str, text: &str) -> SyntaxResult<String> {
        let target = self.get(to)?;
        let graph = self.parse(from, text)?;
        target.export(&graph)
    }
}

impl fmt::Debug for SyntaxRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxRegistry")
            .field("adapters", &self.list_names())
            .finish()
    }
}
