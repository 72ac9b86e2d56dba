//! Project config discovery.
//!
//! Walks upward from the directory of the importing file looking for
//! `tsconfig.json`, then `jsconfig.json`, and never leaves the workspace root.

use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::runtime::Runtime;

/// Config file names, in priority order within a single directory.
pub const CONFIG_FILE_NAMES: &[&str] = &["tsconfig.json", "jsconfig.json"];

/// A located project config and the directory that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    /// Absolute path to `tsconfig.json` or `jsconfig.json`.
    pub config_path: PathBuf,

    /// Directory containing the config file.
    pub project_root: PathBuf,
}

/// Upward config search bounded by a workspace root.
#[derive(Debug, Clone, Copy)]
pub struct ConfigLocator<'a> {
    runtime: &'a dyn Runtime,
}

impl<'a> ConfigLocator<'a> {
    pub fn new(runtime: &'a dyn Runtime) -> Self {
        Self { runtime }
    }

    /// Find the nearest config at or above `start_dir`.
    ///
    /// Returns `None` once the walk leaves `workspace_root` or reaches the
    /// filesystem root. The filesystem root itself is never searched.
    pub fn locate(&self, start_dir: &Path, workspace_root: &Path) -> Option<ConfigLocation> {
        let workspace_root = workspace_root.clean();
        let mut current = start_dir.clean();

        loop {
            if !current.starts_with(&workspace_root) {
                return None;
            }
            let parent = current.parent()?.to_path_buf();

            for name in CONFIG_FILE_NAMES {
                let candidate = current.join(name);
                if self.runtime.is_file(&candidate) {
                    return Some(ConfigLocation {
                        config_path: candidate,
                        project_root: current,
                    });
                }
            }

            current = parent;
        }
    }
}
