//! Registration records produced by plugin discovery.

use serde::Serialize;

use imagehub_core::types::operation::{OperationKind, Phase, PhaseKey};

/// One admitted (plugin, phase key) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginRegistration {
    /// Plugin name.
    pub plugin: String,
    /// Interest key, e.g. `getImagePostExec`.
    pub phase_key: String,
    /// Operation kind of the key.
    pub kind: OperationKind,
    /// Phase of the key.
    pub phase: Phase,
    /// Declared priority (lower runs first).
    pub priority: i32,
    /// Search path the plugin was found under.
    pub path: String,
    /// Namespace prefix of that search path.
    pub prefix: Option<String>,
    /// Discovery position; breaks priority ties.
    pub sequence: usize,
}

impl PluginRegistration {
    /// The key this registration is indexed under.
    pub fn key(&self) -> PhaseKey {
        PhaseKey::new(self.kind, self.phase)
    }
}
