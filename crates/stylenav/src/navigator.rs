//! End-to-end navigation: import line → stylesheet path.
//!
//! Each call locates the config, rebuilds the alias map and resolves, so an
//! edit to `tsconfig.json` is picked up by the next call.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::aliases::{AliasMap, AliasMapBuilder};
use crate::error::{NavigateError, Unresolved};
use crate::extract::extract_import;
use crate::locator::{ConfigLocation, ConfigLocator};
use crate::observer::{ResolveObserver, TracingObserver};
use crate::resolver::{ImportResolver, ResolveOptions};
use crate::runtime::{NativeRuntime, Runtime};

/// Outcome of resolving one specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveResult {
    /// Absolute path of an existing stylesheet.
    Found(PathBuf),

    /// Nothing matched.
    NotFound(Unresolved),
}

impl ResolveResult {
    pub fn is_found(&self) -> bool {
        matches!(self, ResolveResult::Found(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            ResolveResult::Found(path) => Some(path.as_path()),
            ResolveResult::NotFound(_) => None,
        }
    }

    pub fn into_result(self) -> Result<PathBuf, Unresolved> {
        match self {
            ResolveResult::Found(path) => Ok(path),
            ResolveResult::NotFound(unresolved) => Err(unresolved),
        }
    }
}

impl fmt::Display for ResolveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveResult::Found(path) => write!(f, "Found({})", path.display()),
            ResolveResult::NotFound(unresolved) => write!(f, "NotFound({})", unresolved.specifier),
        }
    }
}

/// Runs the locate → alias map → resolve pipeline.
///
/// # Example
///
/// ```rust,no_run
/// use stylenav::Navigator;
/// use std::path::Path;
///
/// let navigator = Navigator::native();
/// let result = navigator.navigate(
///     "@/styles/home.module.scss",
///     Path::new("/ws/app/src/pages"),
///     Path::new("/ws"),
/// );
/// if let Some(path) = result.path() {
///     println!("{}", path.display());
/// }
/// ```
#[derive(Clone)]
pub struct Navigator {
    runtime: Arc<dyn Runtime>,
    observer: Arc<dyn ResolveObserver>,
    options: ResolveOptions,
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("runtime", &self.runtime)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Navigator {
    /// Navigator over `runtime` with default options and `tracing` diagnostics.
    pub fn new(runtime: Arc<dyn Runtime>) -> Self {
        Self {
            runtime,
            observer: Arc::new(TracingObserver),
            options: ResolveOptions::default(),
        }
    }

    /// Navigator over the real filesystem.
    pub fn native() -> Self {
        Self::new(Arc::new(NativeRuntime::new()))
    }

    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn ResolveObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn options(&self) -> ResolveOptions {
        self.options
    }

    /// Nearest config for `start_dir` inside `workspace_root`.
    pub fn locate(&self, start_dir: &Path, workspace_root: &Path) -> Option<ConfigLocation> {
        ConfigLocator::new(self.runtime.as_ref()).locate(start_dir, workspace_root)
    }

    /// Alias map of the project owning `start_dir`.
    pub fn aliases(&self, start_dir: &Path, workspace_root: &Path) -> AliasMap {
        AliasMapBuilder::new(self.runtime.as_ref(), self.observer.as_ref())
            .build(start_dir, workspace_root)
    }

    /// Resolve `specifier` imported from a file in `current_dir`.
    pub fn navigate(
        &self,
        specifier: &str,
        current_dir: &Path,
        workspace_root: &Path,
    ) -> ResolveResult {
        let aliases = self.aliases(current_dir, workspace_root);
        let resolver =
            ImportResolver::new(self.runtime.as_ref(), self.observer.as_ref(), self.options);

        match resolver.resolve(specifier, &aliases, current_dir) {
            Some(path) => ResolveResult::Found(path),
            None => ResolveResult::NotFound(Unresolved {
                specifier: specifier.to_string(),
                current_dir: current_dir.to_path_buf(),
                aliases: aliases.keys().map(str::to_string).collect(),
            }),
        }
    }

    /// Extract the import on `line` of `current_file` and resolve it.
    pub fn navigate_line(
        &self,
        line: &str,
        current_file: &Path,
        workspace_root: &Path,
    ) -> Result<ResolveResult, NavigateError> {
        let specifier = extract_import(line).ok_or_else(|| NavigateError::NoImport {
            line: line.trim().to_string(),
        })?;
        self.observer.import_extracted(&specifier);
        let current_dir = current_file
            .parent()
            .ok_or_else(|| NavigateError::NoParentDirectory(current_file.to_path_buf()))?;

        Ok(self.navigate(specifier.as_str(), current_dir, workspace_root))
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::native()
    }
}
