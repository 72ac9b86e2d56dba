//! Test utilities for the resolution pipeline.
//!
//! - `MemoryRuntime`: an in-memory [`Runtime`] for unit tests that don't need
//!   a real directory tree.
//!
//! A layout only lists its files; a directory is never a file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{Runtime, RuntimeError, RuntimeResult};

/// In-memory runtime keyed by absolute path.
///
/// ```rust
/// use stylenav::runtime::test_utils::MemoryRuntime;
/// use stylenav::runtime::Runtime;
/// use std::path::Path;
///
/// let runtime = MemoryRuntime::new()
///     .with_file("/proj/tsconfig.json", "{}")
///     .with_file("/proj/src/app.module.css", "");
///
/// assert!(runtime.is_file(Path::new("/proj/tsconfig.json")));
/// assert!(!runtime.is_file(Path::new("/proj/src")));
/// assert_eq!(runtime.lookup_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MemoryRuntime {
    files: BTreeMap<PathBuf, String>,
    lookups: AtomicUsize,
}

impl MemoryRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given contents.
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Add several empty files.
    pub fn with_files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        for path in paths {
            self.files.insert(path.into(), String::new());
        }
        self
    }

    /// Number of `is_file` calls served so far.
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

impl Runtime for MemoryRuntime {
    fn is_file(&self, path: &Path) -> bool {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.files.contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> RuntimeResult<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| RuntimeError::FileNotFound(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_runtime_directories_are_not_files() {
        let runtime = MemoryRuntime::new().with_file("/ws/app/src/a.module.css", "");

        assert!(runtime.is_file(Path::new("/ws/app/src/a.module.css")));
        assert!(!runtime.is_file(Path::new("/ws/app/src")));
        assert!(!runtime.is_file(Path::new("/ws")));
        assert_eq!(runtime.lookup_count(), 3);
    }

    #[test]
    fn test_memory_runtime_read() {
        let runtime = MemoryRuntime::new().with_file("/p/tsconfig.json", "{ }");

        assert_eq!(
            runtime.read_to_string(Path::new("/p/tsconfig.json")).unwrap(),
            "{ }"
        );
        assert!(matches!(
            runtime.read_to_string(Path::new("/p/jsconfig.json")),
            Err(RuntimeError::FileNotFound(_))
        ));
    }
}
