//! Workspace root selection.

use std::path::{Path, PathBuf};

use path_clean::PathClean;

/// Pick the workspace root that bounds the config search for `file`.
///
/// The first root containing `file` wins. When none does, the first root is
/// used so that a file opened from outside every root still gets a bound.
/// Containment is checked on cleaned paths, so `..` segments count.
pub fn select_workspace_root<'a>(roots: &'a [PathBuf], file: &Path) -> Option<&'a Path> {
    let file = file.clean();
    roots
        .iter()
        .find(|root| file.starts_with(root.clean()))
        .or_else(|| roots.first())
        .map(PathBuf::as_path)
}
