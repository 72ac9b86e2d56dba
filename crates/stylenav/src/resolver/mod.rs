//! Import specifier resolution.
//!
//! Relative specifiers (`./`, `../`) are tried against the importing file's
//! directory first. Anything that does not resolve that way, including a
//! relative specifier that missed, is matched against the alias map,
//! longest alias first.
//!
//! Resolution never fails with an error: a miss is `None`.

mod aliases;
mod extensions;
mod relative;

pub use aliases::normalize_scope_shorthand;
pub use extensions::{
    extension_variants, has_module_suffix, module_candidates, names_module_file, INDEX_MODULE,
    MODULE_SUFFIXES, STYLE_EXTENSIONS,
};

use std::path::{Path, PathBuf};

use crate::aliases::AliasMap;
use crate::extract::SpecifierKind;
use crate::observer::ResolveObserver;
use crate::runtime::Runtime;

/// Knobs for [`ImportResolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Retry a missed `../x` import as `./x` and `x`.
    ///
    /// Catches imports written with the wrong relative depth. Enabled by
    /// default; disable for strict resolution.
    pub lenient_relative: bool,
}

impl ResolveOptions {
    /// Options with every leniency disabled.
    pub fn strict() -> Self {
        Self {
            lenient_relative: false,
        }
    }
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            lenient_relative: true,
        }
    }
}

/// Resolves style-module import specifiers to files on disk.
pub struct ImportResolver<'a> {
    runtime: &'a dyn Runtime,
    observer: &'a dyn ResolveObserver,
    options: ResolveOptions,
}

impl<'a> ImportResolver<'a> {
    pub fn new(
        runtime: &'a dyn Runtime,
        observer: &'a dyn ResolveObserver,
        options: ResolveOptions,
    ) -> Self {
        Self {
            runtime,
            observer,
            options,
        }
    }

    /// Resolve `specifier` as imported from a file in `current_dir`.
    ///
    /// Returns the absolute path of an existing file, or `None`.
    pub fn resolve(
        &self,
        specifier: &str,
        aliases: &AliasMap,
        current_dir: &Path,
    ) -> Option<PathBuf> {
        let relative = match SpecifierKind::of(specifier) {
            SpecifierKind::Relative => self.resolve_relative(specifier, current_dir),
            SpecifierKind::Aliased => None,
        };

        let found = relative.or_else(|| self.resolve_aliased(specifier, aliases));
        match &found {
            Some(path) => self.observer.resolved(specifier, path),
            None => self.observer.unresolved(specifier, current_dir),
        }
        found
    }

    /// Probe a single candidate.
    fn probe(&self, candidate: &Path) -> bool {
        let found = self.runtime.is_file(candidate);
        self.observer.candidate_probed(candidate, found);
        found
    }

    /// First candidate that exists, in order.
    fn first_existing(&self, candidates: Vec<PathBuf>) -> Option<PathBuf> {
        candidates.into_iter().find(|candidate| self.probe(candidate))
    }
}
