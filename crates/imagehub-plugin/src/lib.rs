//! # imagehub-plugin
//!
//! The operation plugin system:
//!
//! - A static [`PluginCatalog`] of plugin collections keyed by search path
//! - The [`PluginRegistry`], which resolves ordered pre/post lists per operation kind
//! - The [`PluginExecutionEngine`], which runs one phase against a context
//! - The built-in plugins (image identification, metadata validation,
//!   image manipulation, cache tagging)

pub mod catalog;
pub mod definitions;
pub mod engine;
pub mod plugins;
pub mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use catalog::{BUILTIN_PATH, PluginCatalog};
pub use definitions::PluginRegistration;
pub use engine::PluginExecutionEngine;
pub use registry::{PluginRegistry, discover};
