//! Explicit importer registry
//!
//! Maps a file extension to the plugin serving it. Populated once during
//! process initialization and passed by reference to callers - there is no
//! global singleton to look plugins up through.

use crate::plugin::ImportPlugin;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Registry of import plugins keyed by lowercase file extension
#[derive(Default)]
pub struct ImporterRegistry {
    plugins: HashMap<String, Arc<dyn ImportPlugin>>,
}

impl ImporterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `plugin` under every extension it claims
    ///
    /// A later registration for the same extension replaces the earlier one.
    pub fn register(&mut self, plugin: Arc<dyn ImportPlugin>) {
        for ext in plugin.extensions() {
            self.plugins.insert((*ext).to_lowercase(), plugin.clone());
        }
    }

    /// Find the plugin serving `ext` (matched case-insensitively)
    pub fn find(&self, ext: &str) -> Option<&Arc<dyn ImportPlugin>> {
        self.plugins.get(&ext.to_lowercase())
    }

    /// Find the plugin serving `path` by its extension
    pub fn for_path(&self, path: &Path) -> Option<&Arc<dyn ImportPlugin>> {
        let ext = path.extension()?.to_str()?;
        self.find(ext)
    }

    /// Number of claimed extensions
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether no plugin is registered
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
