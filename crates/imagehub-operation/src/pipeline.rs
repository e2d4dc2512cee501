//! preExec → core → postExec.

use std::time::Instant;

use tracing::{debug, info, warn};

use imagehub_core::context::OperationContext;
use imagehub_core::result::AppResult;
use imagehub_core::types::operation::Phase;
use imagehub_plugin::PluginExecutionEngine;

use crate::handlers;

/// Runs an operation to completion.
///
/// A pre-exec failure prevents the core handler from running. A post-exec
/// failure is reported even though the core handler's effects (driver
/// writes, response fields) have already happened.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    engine: PluginExecutionEngine,
}

impl Pipeline {
    /// Creates a pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes the operation held by `ctx`.
    pub async fn execute(&self, ctx: &mut OperationContext) -> AppResult<()> {
        let started = Instant::now();
        debug!(kind = %ctx.kind(), hash = %ctx.hash, "Executing operation");

        let result = self.run_stages(ctx).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(()) => info!(
                kind = %ctx.kind(),
                hash = %ctx.hash,
                status = ctx.response.status.as_u16(),
                elapsed_ms,
                "Operation completed"
            ),
            Err(e) => warn!(
                kind = %ctx.kind(),
                hash = %ctx.hash,
                error = %e,
                elapsed_ms,
                "Operation failed"
            ),
        }
        result
    }

    async fn run_stages(&self, ctx: &mut OperationContext) -> AppResult<()> {
        self.engine.run_phase(Phase::PreExec, ctx).await?;
        handlers::execute(ctx).await?;
        self.engine.run_phase(Phase::PostExec, ctx).await
    }
}
