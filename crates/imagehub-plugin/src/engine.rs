//! Sequential execution of one phase's plugins.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use imagehub_core::context::OperationContext;
use imagehub_core::error::AppError;
use imagehub_core::result::AppResult;
use imagehub_core::traits::plugin::PluginRef;
use imagehub_core::types::operation::Phase;

/// Runs plugins strictly in order against a context.
///
/// Each plugin is awaited before the next starts. The first failure
/// aborts the phase and is returned as an `ErrorKind::Plugin` error whose
/// source is the plugin's own error.
#[derive(Debug, Clone, Copy, Default)]
pub struct PluginExecutionEngine;

impl PluginExecutionEngine {
    /// Creates an engine.
    pub fn new() -> Self {
        Self
    }

    /// Runs `plugins` as `phase` of the context's operation.
    pub async fn run(
        &self,
        phase: Phase,
        plugins: &[PluginRef],
        ctx: &mut OperationContext,
    ) -> AppResult<()> {
        if plugins.is_empty() {
            return Ok(());
        }

        debug!(
            kind = %ctx.kind(),
            hash = %ctx.hash,
            phase = %phase,
            plugin_count = plugins.len(),
            "Running plugin phase"
        );

        for plugin in plugins {
            let started = Instant::now();

            if let Err(err) = plugin.exec(ctx).await {
                warn!(
                    kind = %ctx.kind(),
                    hash = %ctx.hash,
                    plugin = %plugin.name(),
                    phase = %phase,
                    error = %err,
                    "Plugin failed, aborting phase"
                );
                let message = format!(
                    "Plugin '{}' failed in {}{}: {}",
                    plugin.name(),
                    ctx.kind(),
                    phase,
                    err.message
                );
                return Err(AppError::plugin(message, err));
            }

            debug!(
                plugin = %plugin.name(),
                phase = %phase,
                elapsed_us = started.elapsed().as_micros() as u64,
                "Plugin finished"
            );
        }

        Ok(())
    }

    /// Runs the context's own list for `phase`.
    pub async fn run_phase(&self, phase: Phase, ctx: &mut OperationContext) -> AppResult<()> {
        let plugins = Arc::clone(ctx.plugins());
        self.run(phase, plugins.phase(phase), ctx).await
    }
}
