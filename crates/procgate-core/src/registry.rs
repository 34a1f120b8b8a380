//! Registry of named processes.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::ports::{Process, ProcessInterface};

/// Insertion-ordered map from process name to implementation.
#[derive(Clone, Default)]
pub struct ProcessRegistry {
    processes: IndexMap<String, Arc<dyn Process>>,
}

impl ProcessRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `process` under `name`.
    ///
    /// Re-registering a name replaces the implementation but keeps its
    /// original position.
    pub fn register(&mut self, name: impl Into<String>, process: Arc<dyn Process>) {
        let name = name.into();
        tracing::debug!(process = %name, "Registered process");
        self.processes.insert(name, process);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.processes.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Process>> {
        self.processes.get(name).cloned()
    }

    /// Names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.processes.keys().map(String::as_str)
    }

    /// `(name, interface)` pairs in registration order.
    pub fn interfaces(&self) -> impl Iterator<Item = (&str, ProcessInterface)> {
        self.processes
            .iter()
            .map(|(name, process)| (name.as_str(), process.interface()))
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

impl std::fmt::Debug for ProcessRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.processes.keys()).finish()
    }
}
