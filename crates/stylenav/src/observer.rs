//! Diagnostics hooks for the resolution pipeline.
//!
//! The locator, alias builder and resolver never print. They report what they
//! did through a [`ResolveObserver`], which a host can implement to collect
//! diagnostics, or leave as [`TracingObserver`] to get `tracing` events.
//! Every method has an empty default body, so implementors only override the
//! events they care about.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::ConfigLoadError;
use crate::extract::ImportSpecifier;
use crate::locator::ConfigLocation;

/// Receives pipeline events.
pub trait ResolveObserver: Send + Sync {
    /// A `tsconfig.json` / `jsconfig.json` was found.
    fn config_located(&self, _location: &ConfigLocation) {}

    /// The upward search hit the workspace boundary or the filesystem root.
    fn config_missing(&self, _start_dir: &Path, _workspace_root: &Path) {}

    /// The located config could not be read or parsed. The alias map is empty.
    fn config_failed(&self, _error: &ConfigLoadError) {}

    /// An alias entry was added to the map.
    fn alias_registered(&self, _alias: &str, _target: &Path) {}

    /// A `paths` entry was unusable. The alias map is empty.
    fn paths_rejected(&self, _pattern: &str, _reason: &str) {}

    /// A style-module import was pulled out of a source line.
    fn import_extracted(&self, _specifier: &ImportSpecifier) {}

    /// A candidate file was checked.
    fn candidate_probed(&self, _candidate: &Path, _found: bool) {}

    /// A `../` import only resolved after rewriting its leading segment.
    fn lenient_fallback(&self, _specifier: &str, _rewritten: &str, _path: &Path) {}

    /// The specifier resolved to `path`.
    fn resolved(&self, _specifier: &str, _path: &Path) {}

    /// Every relative and alias candidate was exhausted.
    fn unresolved(&self, _specifier: &str, _current_dir: &Path) {}
}

/// Observer that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ResolveObserver for NoopObserver {}

/// Observer that forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ResolveObserver for TracingObserver {
    fn config_located(&self, location: &ConfigLocation) {
        debug!(
            "[stylenav] Found {} (project root: {})",
            location.config_path.display(),
            location.project_root.display()
        );
    }

    fn config_missing(&self, start_dir: &Path, workspace_root: &Path) {
        debug!(
            "[stylenav] No tsconfig.json or jsconfig.json between {} and {}",
            start_dir.display(),
            workspace_root.display()
        );
    }

    fn config_failed(&self, error: &ConfigLoadError) {
        warn!("[stylenav] {}; continuing without aliases", error);
    }

    fn alias_registered(&self, alias: &str, target: &Path) {
        debug!("[stylenav] Alias \"{}\" -> {}", alias, target.display());
    }

    fn paths_rejected(&self, pattern: &str, reason: &str) {
        warn!(
            "[stylenav] paths entry \"{}\" has {}; continuing without aliases",
            pattern, reason
        );
    }

    fn import_extracted(&self, specifier: &ImportSpecifier) {
        match specifier.flavor() {
            Some(flavor) => debug!("[stylenav] Import {} ({} module)", specifier, flavor),
            None => debug!("[stylenav] Import {} (no module extension)", specifier),
        }
    }

    fn candidate_probed(&self, candidate: &Path, found: bool) {
        tracing::trace!(
            "[stylenav] {} {}",
            if found { "hit" } else { "miss" },
            candidate.display()
        );
    }

    fn lenient_fallback(&self, specifier: &str, rewritten: &str, path: &Path) {
        warn!(
            "[stylenav] \"{}\" only resolved as \"{}\" ({}); the import path is probably wrong",
            specifier,
            rewritten,
            path.display()
        );
    }

    fn resolved(&self, specifier: &str, path: &Path) {
        info!("[stylenav] {} -> {}", specifier, path.display());
    }

    fn unresolved(&self, specifier: &str, current_dir: &Path) {
        info!(
            "[stylenav] No style module found for {} from {}",
            specifier,
            current_dir.display()
        );
    }
}
