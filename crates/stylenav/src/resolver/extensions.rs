//! Style-module filename variants.
//!
//! Candidate order is fixed, so when several variants exist on disk the
//! same one always wins (`.css` before `.scss` before `.sass`).

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Style extensions, in probe order.
pub const STYLE_EXTENSIONS: &[&str] = &["css", "scss", "sass"];

/// Suffixes appended to an extensionless specifier, in probe order.
pub const MODULE_SUFFIXES: &[&str] = &[".module.css", ".module.scss", ".module.sass"];

/// Index file tried when a specifier names a directory.
pub const INDEX_MODULE: &str = "index.module.css";

/// Whether a specifier spells out a style-module file (`x.module.scss`).
pub fn names_module_file(specifier: &str) -> bool {
    specifier.contains(".module.")
}

/// Whether a path already ends in one of [`MODULE_SUFFIXES`].
pub fn has_module_suffix(path: &Path) -> bool {
    let path = path.as_os_str().to_string_lossy();
    MODULE_SUFFIXES.iter().any(|suffix| path.ends_with(suffix))
}

/// Candidates for a path without a style-module extension:
/// `base.module.css`, `base.module.scss`, `base.module.sass`,
/// then `base/index.module.css`.
pub fn module_candidates(base: &Path) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = MODULE_SUFFIXES
        .iter()
        .map(|suffix| append_suffix(base, suffix))
        .collect();
    candidates.push(base.join(INDEX_MODULE));
    candidates
}

/// The same file with each style extension swapped in.
///
/// Empty when `path` does not end in `.css`, `.scss` or `.sass`.
pub fn extension_variants(path: &Path) -> Vec<PathBuf> {
    let has_style_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| STYLE_EXTENSIONS.contains(&ext));

    if !has_style_extension {
        return Vec::new();
    }

    STYLE_EXTENSIONS
        .iter()
        .map(|ext| path.with_extension(ext))
        .collect()
}

fn append_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut raw = OsString::from(base.as_os_str());
    raw.push(suffix);
    PathBuf::from(raw)
}
