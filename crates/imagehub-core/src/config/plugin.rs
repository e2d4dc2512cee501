//! Plugin search path configuration.

use serde::{Deserialize, Serialize};

/// One plugin search path, optionally narrowed to a namespace prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PluginPathConfig {
    /// Identifier of a compiled-in plugin collection.
    pub path: String,
    /// Only plugins whose namespace starts with this prefix are considered.
    #[serde(default)]
    pub prefix: Option<String>,
}

impl PluginPathConfig {
    /// A search path without a prefix.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            prefix: None,
        }
    }

    /// Sets the namespace prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}
