//! Plugin discovery and the per-kind priority index.
//!
//! Discovery walks the search paths in order (the built-in path first,
//! then configured paths), collects every plugin whose namespace matches
//! the path's prefix, and admits it to each phase whose interest key it
//! declares. Lists are ordered by ascending priority; equal priorities
//! keep discovery order.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use imagehub_core::config::plugin::PluginPathConfig;
use imagehub_core::traits::plugin::{PhasePlugins, PluginRef};
use imagehub_core::types::operation::{OperationKind, Phase, PhaseKey};

use crate::catalog::{BUILTIN_PATH, PluginCatalog};
use crate::definitions::PluginRegistration;

/// The effective search paths: [`BUILTIN_PATH`] first, then `configured`
/// in order. A repeated `(path, prefix)` pair is kept at its first position.
pub fn search_paths(configured: &[PluginPathConfig]) -> Vec<PluginPathConfig> {
    let mut paths = vec![PluginPathConfig::new(BUILTIN_PATH)];
    for entry in configured {
        let entry = PluginPathConfig {
            path: entry.path.clone(),
            prefix: entry.prefix.clone().filter(|p| !p.is_empty()),
        };
        if !paths.contains(&entry) {
            paths.push(entry);
        }
    }
    paths
}

/// A plugin found on a search path.
struct Candidate<'a> {
    plugin: &'a PluginRef,
    path: &'a PluginPathConfig,
    sequence: usize,
}

fn candidates<'a>(catalog: &'a PluginCatalog, paths: &'a [PluginPathConfig]) -> Vec<Candidate<'a>> {
    let mut found = Vec::new();
    let mut seen: HashMap<&str, (&PluginRef, &str)> = HashMap::new();

    for path in paths {
        let Some(plugins) = catalog.plugins(&path.path) else {
            warn!(path = %path.path, "Plugin search path not found, skipping");
            continue;
        };

        for plugin in plugins {
            let matches_prefix = path
                .prefix
                .as_deref()
                .is_none_or(|prefix| plugin.namespace().starts_with(prefix));

            if !matches_prefix {
                continue;
            }

            // A plugin reachable through several paths runs once, at its first position.
            if let Some((first, first_path)) = seen.get(plugin.name()) {
                if !Arc::ptr_eq(first, plugin) {
                    warn!(
                        plugin = plugin.name(),
                        kept = %first_path,
                        shadowed = %path.path,
                        "Plugin name already registered by an earlier path, skipping"
                    );
                }
                continue;
            }

            seen.insert(plugin.name(), (plugin, path.path.as_str()));
            found.push(Candidate {
                plugin,
                path,
                sequence: found.len(),
            });
        }
    }
    found
}

fn registrations_for(
    candidates: &[Candidate<'_>],
    key: PhaseKey,
) -> Vec<(PluginRegistration, PluginRef)> {
    let mut admitted: Vec<(PluginRegistration, PluginRef)> = candidates
        .iter()
        .filter_map(|c| {
            let priority = c.plugin.interests().priority(key)?;
            let registration = PluginRegistration {
                plugin: c.plugin.name().to_string(),
                phase_key: key.to_string(),
                kind: key.kind,
                phase: key.phase,
                priority,
                path: c.path.path.clone(),
                prefix: c.path.prefix.clone(),
                sequence: c.sequence,
            };
            Some((registration, Arc::clone(c.plugin)))
        })
        .collect();

    admitted.sort_by_key(|(r, _)| (r.priority, r.sequence));
    admitted
}

/// Resolves the ordered plugin lists for `kind`.
///
/// Pure: the same catalog and configuration always give the same lists.
pub fn discover(
    catalog: &PluginCatalog,
    kind: OperationKind,
    configured: &[PluginPathConfig],
) -> PhasePlugins {
    let paths = search_paths(configured);
    let found = candidates(catalog, &paths);

    let list = |phase| {
        registrations_for(&found, PhaseKey::new(kind, phase))
            .into_iter()
            .map(|(_, plugin)| plugin)
            .collect()
    };

    PhasePlugins {
        pre_exec: list(Phase::PreExec),
        post_exec: list(Phase::PostExec),
    }
}

/// Plugin lists for every operation kind, computed once at startup.
#[derive(Debug, Clone, Default)]
pub struct PluginRegistry {
    phases: HashMap<OperationKind, Arc<PhasePlugins>>,
    registrations: Vec<PluginRegistration>,
}

impl PluginRegistry {
    /// Discovers plugins for all kinds.
    pub fn build(catalog: &PluginCatalog, configured: &[PluginPathConfig]) -> Self {
        let paths = search_paths(configured);
        let found = candidates(catalog, &paths);

        let mut phases = HashMap::new();
        let mut registrations = Vec::new();

        for kind in OperationKind::ALL {
            let mut plugins = PhasePlugins::default();
            for phase in Phase::ALL {
                for (registration, plugin) in registrations_for(&found, PhaseKey::new(kind, phase)) {
                    debug!(
                        plugin = %registration.plugin,
                        phase = %registration.phase_key,
                        priority = registration.priority,
                        "Plugin registered"
                    );
                    match phase {
                        Phase::PreExec => plugins.pre_exec.push(plugin),
                        Phase::PostExec => plugins.post_exec.push(plugin),
                    }
                    registrations.push(registration);
                }
            }
            phases.insert(kind, Arc::new(plugins));
        }

        info!(
            search_paths = paths.len(),
            plugins = found.len(),
            registrations = registrations.len(),
            "Plugin registry built"
        );

        Self {
            phases,
            registrations,
        }
    }

    /// The frozen lists for `kind`.
    pub fn phase_plugins(&self, kind: OperationKind) -> Arc<PhasePlugins> {
        self.phases.get(&kind).cloned().unwrap_or_default()
    }

    /// Every admitted registration, grouped by kind then phase, in execution order.
    pub fn registrations(&self) -> &[PluginRegistration] {
        &self.registrations
    }
}
