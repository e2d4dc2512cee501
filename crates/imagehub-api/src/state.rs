//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use axum::http::Method;

use imagehub_core::config::AppConfig;
use imagehub_core::context::OperationContext;
use imagehub_core::result::AppResult;
use imagehub_core::types::operation::OperationKind;
use imagehub_core::types::request::OperationRequest;
use imagehub_operation::{OperationFactory, Pipeline};

/// Shared application state, cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Builds operation contexts.
    pub factory: Arc<OperationFactory>,
    /// Runs operations.
    pub pipeline: Pipeline,
    /// When the server started.
    pub started_at: Instant,
}

impl AppState {
    /// Creates state around a ready factory.
    pub fn new(factory: OperationFactory) -> Self {
        Self {
            config: Arc::clone(factory.config()),
            factory: Arc::new(factory),
            pipeline: Pipeline::new(),
            started_at: Instant::now(),
        }
    }

    /// Builds and executes one operation.
    pub async fn run_operation(
        &self,
        kind: OperationKind,
        method: Method,
        hash: &str,
        request: OperationRequest,
    ) -> AppResult<OperationContext> {
        let mut ctx = self
            .factory
            .create_kind(kind, method, hash)
            .with_request(request);
        self.pipeline.execute(&mut ctx).await?;
        Ok(ctx)
    }
}
