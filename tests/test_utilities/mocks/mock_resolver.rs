use depth::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock DependencyResolver serving prebuilt trees by root name
#[derive(Default, Clone)]
pub struct MockResolver {
    trees: HashMap<String, DependencyNode>,
    failures: HashMap<String, String>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tree(mut self, tree: DependencyNode) -> Self {
        self.trees.insert(tree.name().to_string(), tree);
        self
    }

    pub fn with_failure(mut self, package: &str, message: &str) -> Self {
        self.failures
            .insert(package.to_string(), message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl DependencyResolver for MockResolver {
    fn resolve(&self, package: &str, _options: &ResolveOptions) -> Result<DependencyNode> {
        self.calls.lock().unwrap().push(package.to_string());
        if let Some(message) = self.failures.get(package) {
            anyhow::bail!("{}", message);
        }
        self.trees
            .get(package)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no tree registered for '{}'", package))
    }
}
