//! Error types for the navigation pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// A specifier that matched no file.
///
/// Carries what a user needs to see why: the specifier, the directory it
/// was resolved from, and the aliases that were available.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no style module found for '{specifier}' from {}", .current_dir.display())]
pub struct Unresolved {
    pub specifier: String,
    pub current_dir: PathBuf,
    pub aliases: Vec<String>,
}

impl Unresolved {
    /// Multi-line explanation for display to a user.
    pub fn diagnostic(&self) -> String {
        let aliases = if self.aliases.is_empty() {
            "(none)".to_string()
        } else {
            self.aliases.join(", ")
        };
        format!(
            "Path not found for: {}\nCurrent directory: {}\nAvailable aliases: {}",
            self.specifier,
            self.current_dir.display(),
            aliases
        )
    }
}

/// Failures before resolution starts.
#[derive(Debug, Error)]
pub enum NavigateError {
    /// The source line holds no style-module import.
    #[error("no style module import found on this line: {line}")]
    NoImport { line: String },

    /// The importing file has no parent directory.
    #[error("cannot determine the directory of {}", .0.display())]
    NoParentDirectory(PathBuf),
}
