//! Test doubles shared by this crate's unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::Method;

use imagehub_core::config::AppConfig;
use imagehub_core::context::OperationContext;
use imagehub_core::error::{AppError, ErrorKind};
use imagehub_core::result::AppResult;
use imagehub_core::traits::plugin::{InterestMap, OperationPlugin, PhasePlugins};
use imagehub_core::types::operation::OperationKind;
use imagehub_database::providers::MemoryDatabase;
use imagehub_storage::providers::MemoryStorage;

const TRACE: &str = "trace";

/// What a [`StubPlugin`] does when executed.
#[derive(Debug, Clone)]
pub enum StubAction {
    /// Appends the plugin name to the `trace` attribute.
    Trace,
    /// Fails with an error of this kind.
    Fail(ErrorKind),
}

/// Configurable plugin for registry and engine tests.
#[derive(Debug)]
pub struct StubPlugin {
    name: &'static str,
    namespace: &'static str,
    interests: InterestMap,
    action: StubAction,
}

impl StubPlugin {
    pub fn new(name: &'static str, interests: InterestMap) -> Self {
        Self {
            name,
            namespace: "",
            interests,
            action: StubAction::Trace,
        }
    }

    pub fn in_namespace(mut self, namespace: &'static str) -> Self {
        self.namespace = namespace;
        self
    }

    pub fn with_action(mut self, action: StubAction) -> Self {
        self.action = action;
        self
    }
}

#[async_trait]
impl OperationPlugin for StubPlugin {
    fn name(&self) -> &str {
        self.name
    }

    fn namespace(&self) -> &str {
        self.namespace
    }

    fn interests(&self) -> InterestMap {
        self.interests.clone()
    }

    async fn exec(&self, ctx: &mut OperationContext) -> AppResult<()> {
        match &self.action {
            StubAction::Trace => {
                let mut seen = trace(ctx);
                seen.push(self.name.to_string());
                ctx.set_attribute(TRACE, serde_json::json!(seen));
                Ok(())
            }
            StubAction::Fail(kind) => Err(AppError::new(*kind, format!("{} failed", self.name))),
        }
    }
}

/// Names recorded by tracing stubs, in execution order.
pub fn trace(ctx: &OperationContext) -> Vec<String> {
    ctx.attribute(TRACE)
        .and_then(|v| serde_json::from_value(v.clone()).ok())
        .unwrap_or_default()
}

/// A context backed by in-memory drivers and the default configuration.
pub fn context(kind: OperationKind) -> OperationContext {
    context_with_config(kind, AppConfig::default())
}

pub fn context_with_config(kind: OperationKind, config: AppConfig) -> OperationContext {
    OperationContext::new(
        kind,
        Method::GET,
        "f00d",
        Arc::new(MemoryDatabase::new()),
        Arc::new(MemoryStorage::new()),
        Arc::new(PhasePlugins::default()),
        Arc::new(config),
    )
}
