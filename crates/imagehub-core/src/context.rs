//! Per-request operation state threaded through plugins and core logic.

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::Method;

use crate::config::AppConfig;
use crate::traits::database::DatabaseDriver;
use crate::traits::plugin::PhasePlugins;
use crate::traits::storage::StorageDriver;
use crate::types::image::Image;
use crate::types::operation::OperationKind;
use crate::types::request::OperationRequest;
use crate::types::response::OperationResponse;

/// Mutable state of one operation, from construction to response.
///
/// Built by the operation factory; the kind, driver handles, plugin lists
/// and configuration snapshot are fixed at construction. Plugins and the
/// core handler mutate the public fields.
#[derive(Debug)]
pub struct OperationContext {
    kind: OperationKind,
    /// Identifier of the target image.
    pub hash: String,
    /// HTTP method that triggered the operation.
    pub method: Method,
    /// Request data supplied by the transport layer.
    pub request: OperationRequest,
    /// The image being added, fetched or transformed.
    pub image: Image,
    /// The response being built.
    pub response: OperationResponse,
    /// Free-form values plugins use to pass state along the pipeline.
    pub attributes: HashMap<String, serde_json::Value>,
    database: Arc<dyn DatabaseDriver>,
    storage: Arc<dyn StorageDriver>,
    plugins: Arc<PhasePlugins>,
    config: Arc<AppConfig>,
}

impl OperationContext {
    /// Creates a context with an empty image and response.
    pub fn new(
        kind: OperationKind,
        method: Method,
        hash: impl Into<String>,
        database: Arc<dyn DatabaseDriver>,
        storage: Arc<dyn StorageDriver>,
        plugins: Arc<PhasePlugins>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            kind,
            hash: hash.into(),
            method,
            request: OperationRequest::default(),
            image: Image::default(),
            response: OperationResponse::default(),
            attributes: HashMap::new(),
            database,
            storage,
            plugins,
            config,
        }
    }

    /// Attaches transport request data.
    pub fn with_request(mut self, request: OperationRequest) -> Self {
        self.request = request;
        self
    }

    /// The operation kind.
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// The database driver handle.
    pub fn database(&self) -> &Arc<dyn DatabaseDriver> {
        &self.database
    }

    /// The storage driver handle.
    pub fn storage(&self) -> &Arc<dyn StorageDriver> {
        &self.storage
    }

    /// The plugin lists resolved at construction.
    pub fn plugins(&self) -> &Arc<PhasePlugins> {
        &self.plugins
    }

    /// The configuration snapshot.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Reads an attribute set by an earlier plugin.
    pub fn attribute(&self, key: &str) -> Option<&serde_json::Value> {
        self.attributes.get(key)
    }

    /// Sets an attribute for later plugins.
    pub fn set_attribute(&mut self, key: &str, value: serde_json::Value) {
        self.attributes.insert(key.to_string(), value);
    }
}
