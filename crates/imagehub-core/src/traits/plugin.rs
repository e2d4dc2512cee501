//! Plugin traits for the operation pipeline.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::context::OperationContext;
use crate::result::AppResult;
use crate::types::operation::{OperationKind, Phase, PhaseKey};

/// A plugin's declared interest: phase key → priority (lower runs first).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterestMap {
    entries: HashMap<PhaseKey, i32>,
}

impl InterestMap {
    /// An empty declaration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares interest in `kind`/`phase` at `priority`.
    ///
    /// Declaring the same key twice keeps the last priority.
    pub fn with(mut self, kind: OperationKind, phase: Phase, priority: i32) -> Self {
        self.entries.insert(PhaseKey::new(kind, phase), priority);
        self
    }

    /// Builds a declaration from `"<kind><Phase>"` string keys.
    ///
    /// Unknown keys are ignored with a warning.
    pub fn from_pairs(pairs: &[(&str, i32)]) -> Self {
        let mut map = Self::new();
        for (key, priority) in pairs {
            match key.parse::<PhaseKey>() {
                Ok(key) => {
                    map.entries.insert(key, *priority);
                }
                Err(e) => warn!(key = %key, error = %e, "Ignoring unknown plugin interest key"),
            }
        }
        map
    }

    /// Priority declared for `key`, if any.
    pub fn priority(&self, key: PhaseKey) -> Option<i32> {
        self.entries.get(&key).copied()
    }

    /// Whether nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An extension unit run before or after an operation's core logic.
///
/// Plugins receive the whole context mutably and may change the image,
/// the response, or any other field except the frozen plugin lists.
#[async_trait]
pub trait OperationPlugin: Send + Sync + std::fmt::Debug + 'static {
    /// Unique plugin name.
    fn name(&self) -> &str;

    /// Namespace the plugin is declared under; search path prefixes match against it.
    fn namespace(&self) -> &str {
        ""
    }

    /// Which kind/phase pairs the plugin runs for, and at what priority.
    fn interests(&self) -> InterestMap;

    /// Runs the plugin against the operation.
    async fn exec(&self, ctx: &mut OperationContext) -> AppResult<()>;
}

/// Shared handle to a plugin instance.
pub type PluginRef = Arc<dyn OperationPlugin>;

/// The ordered plugin lists of one operation kind.
#[derive(Debug, Clone, Default)]
pub struct PhasePlugins {
    /// Plugins run before the core logic, in execution order.
    pub pre_exec: Vec<PluginRef>,
    /// Plugins run after the core logic, in execution order.
    pub post_exec: Vec<PluginRef>,
}

impl PhasePlugins {
    /// The list for `phase`.
    pub fn phase(&self, phase: Phase) -> &[PluginRef] {
        match phase {
            Phase::PreExec => &self.pre_exec,
            Phase::PostExec => &self.post_exec,
        }
    }

    /// Plugin names of `phase`, in execution order.
    pub fn names(&self, phase: Phase) -> Vec<&str> {
        self.phase(phase).iter().map(|p| p.name()).collect()
    }
}
