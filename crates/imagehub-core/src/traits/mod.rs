//! Core traits defined in `imagehub-core` and implemented by other crates.

pub mod database;
pub mod plugin;
pub mod storage;

pub use database::DatabaseDriver;
pub use plugin::{InterestMap, OperationPlugin, PhasePlugins, PluginRef};
pub use storage::StorageDriver;
