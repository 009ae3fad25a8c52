//! Registry of configured entity indices

use super::{dataset, flow, run, study, task, IndexConfig};
use std::collections::HashMap;

/// Registry resolving index names to their configurations
pub struct IndexRegistry {
    configs: HashMap<String, IndexConfig>,
}

impl IndexRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            configs: HashMap::new(),
        }
    }

    /// Registry with all OpenML entity indices
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(dataset::config());
        registry.register(task::config());
        registry.register(flow::config());
        registry.register(run::config());
        registry.register(study::config());
        registry
    }

    /// Register an index configuration, replacing any previous one
    pub fn register(&mut self, config: IndexConfig) {
        self.configs.insert(config.name.clone(), config);
    }

    /// Get a configuration by index name
    pub fn get(&self, name: &str) -> Option<&IndexConfig> {
        self.configs.get(name)
    }

    /// All registered index names, sorted for stable output
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.configs.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Check whether an index is registered
    pub fn contains(&self, name: &str) -> bool {
        self.configs.contains_key(name)
    }

    /// Number of registered indices
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

impl Default for IndexRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry() {
        let registry = IndexRegistry::with_defaults();
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.names(), vec!["data", "flow", "run", "study", "task"]);
        assert!(registry.contains("data"));
        assert!(!registry.contains("user"));
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = IndexRegistry::new();
        registry.register(IndexConfig::new("data"));
        registry.register(dataset::config());

        assert_eq!(registry.len(), 1);
        assert!(!registry.get("data").unwrap().search_fields.is_empty());
    }
}
