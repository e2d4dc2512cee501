//! Static table of plugin collections, keyed by search path.

use std::sync::Arc;

use imagehub_core::traits::plugin::PluginRef;

use crate::plugins::{CacheTagPlugin, IdentifyImagePlugin, ManipulateImagePlugin, ValidateMetadataPlugin};

/// Search path of the plugins shipped with ImageHub. Always searched first.
pub const BUILTIN_PATH: &str = "builtin";

/// Compiled-in plugin collections. Within a path, plugins keep their
/// declaration order.
#[derive(Debug, Clone, Default)]
pub struct PluginCatalog {
    paths: Vec<(String, Vec<PluginRef>)>,
}

impl PluginCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog holding the built-in plugins under [`BUILTIN_PATH`].
    pub fn builtin() -> Self {
        Self::new().with_path(
            BUILTIN_PATH,
            vec![
                Arc::new(IdentifyImagePlugin),
                Arc::new(ValidateMetadataPlugin),
                Arc::new(ManipulateImagePlugin),
                Arc::new(CacheTagPlugin),
            ],
        )
    }

    /// Adds plugins under `path`, after any already declared there.
    pub fn with_path(mut self, path: &str, plugins: Vec<PluginRef>) -> Self {
        for plugin in plugins {
            self.register(path, plugin);
        }
        self
    }

    /// Declares one plugin under `path`.
    pub fn register(&mut self, path: &str, plugin: PluginRef) {
        match self.paths.iter_mut().find(|(p, _)| p == path) {
            Some((_, plugins)) => plugins.push(plugin),
            None => self.paths.push((path.to_string(), vec![plugin])),
        }
    }

    /// Plugins declared under `path`, or `None` for an unknown path.
    pub fn plugins(&self, path: &str) -> Option<&[PluginRef]> {
        self.paths
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, plugins)| plugins.as_slice())
    }

    /// Known search path identifiers.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(|(p, _)| p.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_declaration_order() {
        let catalog = PluginCatalog::builtin();
        let names: Vec<&str> = catalog
            .plugins(BUILTIN_PATH)
            .unwrap()
            .iter()
            .map(|p| p.name())
            .collect();
        assert_eq!(
            names,
            ["identify-image", "validate-metadata", "manipulate-image", "cache-tag"]
        );
        assert!(catalog.plugins("vendor").is_none());
    }
}
