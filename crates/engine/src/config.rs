//! Configuration keys and the in-memory config source.

use std::collections::HashMap;

use stencil_action::ConfigSource;

/// Configuration key naming the root directory under which workspaces
/// are derived. Unset deployments fall back to the system temp dir.
pub const WORKING_DIR_KEY: &str = "engine.working_dir";

/// In-memory [`ConfigSource`] backed by a flat key/value map.
///
/// Used by embedders and tests; the CLI flattens its config file into
/// one of these before handing it to the executor.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfig {
    values: HashMap<String, String>,
}

impl MemoryConfig {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing any existing one under the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

impl ConfigSource for MemoryConfig {
    fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
