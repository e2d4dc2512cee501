//! Construction of operation contexts.

use std::str::FromStr;
use std::sync::Arc;

use axum::http::Method;
use tracing::{debug, info};

use imagehub_core::config::AppConfig;
use imagehub_core::context::OperationContext;
use imagehub_core::result::AppResult;
use imagehub_core::traits::database::DatabaseDriver;
use imagehub_core::traits::storage::StorageDriver;
use imagehub_core::types::operation::OperationKind;
use imagehub_database::build_database;
use imagehub_plugin::{PluginCatalog, PluginRegistry};
use imagehub_storage::build_storage;

/// Builds fully wired [`OperationContext`]s.
///
/// Drivers and the plugin registry are resolved once, when the factory is
/// built; every context shares them.
#[derive(Debug, Clone)]
pub struct OperationFactory {
    config: Arc<AppConfig>,
    database: Arc<dyn DatabaseDriver>,
    storage: Arc<dyn StorageDriver>,
    registry: Arc<PluginRegistry>,
}

impl OperationFactory {
    /// Creates a factory from already resolved parts.
    pub fn new(
        config: Arc<AppConfig>,
        database: Arc<dyn DatabaseDriver>,
        storage: Arc<dyn StorageDriver>,
        registry: Arc<PluginRegistry>,
    ) -> Self {
        Self {
            config,
            database,
            storage,
            registry,
        }
    }

    /// Resolves drivers from `config.database` / `config.storage` and builds
    /// the plugin registry from `catalog` and `config.plugins`.
    pub async fn from_config(config: Arc<AppConfig>, catalog: &PluginCatalog) -> AppResult<Self> {
        let database = build_database(&config.database).await?;
        let storage = build_storage(&config.storage).await?;
        let registry = Arc::new(PluginRegistry::build(catalog, &config.plugins));

        info!(
            database = %database.driver_name(),
            storage = %storage.driver_name(),
            "Operation factory ready"
        );
        Ok(Self::new(config, database, storage, registry))
    }

    /// Creates a context for the operation named `kind`.
    ///
    /// `kind` accepts `"GetImage"` and `"getImage"` spellings. Any other name
    /// fails with `ErrorKind::UnsupportedOperation` and no context is built.
    /// Nothing runs here; see [`Pipeline`](crate::Pipeline).
    pub fn create(&self, kind: &str, method: Method, hash: &str) -> AppResult<OperationContext> {
        let kind = OperationKind::from_str(kind)?;
        Ok(self.create_kind(kind, method, hash))
    }

    /// Creates a context for an already validated kind.
    pub fn create_kind(&self, kind: OperationKind, method: Method, hash: &str) -> OperationContext {
        debug!(kind = %kind, hash = %hash, method = %method, "Creating operation context");
        OperationContext::new(
            kind,
            method,
            hash,
            Arc::clone(&self.database),
            Arc::clone(&self.storage),
            self.registry.phase_plugins(kind),
            Arc::clone(&self.config),
        )
    }

    /// The configuration snapshot handed to contexts.
    pub fn config(&self) -> &Arc<AppConfig> {
        &self.config
    }

    /// The plugin registry.
    pub fn registry(&self) -> &Arc<PluginRegistry> {
        &self.registry
    }

    /// The database driver.
    pub fn database(&self) -> &Arc<dyn DatabaseDriver> {
        &self.database
    }

    /// The storage driver.
    pub fn storage(&self) -> &Arc<dyn StorageDriver> {
        &self.storage
    }
}
