// ABOUTME: Implements the Registry - a name-to-tool lookup table built once
// ABOUTME: at startup and shared read-only by every orchestrator run.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::{ArgsBundle, FnTool, Tool};

/// A registry of tools keyed by name.
///
/// Mutation needs `&mut self`, so once a registry is handed to an
/// `AgentClient` it is effectively frozen. Clones share the same tools.
#[derive(Default, Clone)]
pub struct Registry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its own name. A later tool with the same name
    /// replaces the earlier one.
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.register_arc(Arc::new(tool));
    }

    /// Register a tool from an Arc.
    pub fn register_arc(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Register a closure as a tool called `name`.
    pub fn register_fn<F>(&mut self, name: impl Into<String>, func: F)
    where
        F: Fn(&ArgsBundle) -> String + Send + Sync + 'static,
    {
        self.register(FnTool::new(name, func));
    }

    /// Builder-style variant of [`Registry::register`].
    pub fn with<T: Tool + 'static>(mut self, tool: T) -> Self {
        self.register(tool);
        self
    }

    /// Unregister a tool by name, returning it if it was present.
    pub fn unregister(&mut self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.remove(name)
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Whether a tool with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// List all tool names, sorted alphabetically.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<_> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get the number of registered tools.
    pub fn count(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("tools", &self.list())
            .finish()
    }
}
