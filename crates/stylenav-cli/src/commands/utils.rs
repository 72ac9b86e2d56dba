//! Shared utilities for command implementations.

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use stylenav::{Navigator, select_workspace_root};
use stylenav_config::NavigatorSettings;

use crate::error::{CliError, Result};

/// Resolve a path relative to a working directory.
///
/// If the path is absolute, it is only cleaned. Otherwise, it is joined with
/// the working directory first. `.` and `..` segments never survive.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.clean()
    } else {
        cwd.join(path).clean()
    }
}

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        CliError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to get current directory: {e}"),
        ))
    })
}

/// Workspace root bounding the config search for `file`.
///
/// Chosen among the configured roots; the current directory when none are
/// configured.
pub fn workspace_for(settings: &NavigatorSettings, cwd: &Path, file: &Path) -> PathBuf {
    select_workspace_root(&settings.workspace_roots, file)
        .unwrap_or(cwd)
        .to_path_buf()
}

/// Navigator over the real filesystem configured from settings.
pub fn navigator(settings: &NavigatorSettings) -> Navigator {
    Navigator::native().with_options(settings.resolve_options())
}
