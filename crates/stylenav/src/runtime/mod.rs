//! Filesystem runtime abstraction.
//!
//! Every read the resolution pipeline performs goes through the [`Runtime`]
//! trait: existence probes while walking up to a project config or trying
//! style-module variants, and whole-file reads of `tsconfig.json` /
//! `jsconfig.json`. The pipeline never writes.
//!
//! [`NativeRuntime`] wraps `std::fs`. Tests use the in-memory runtime from
//! [`test_utils`] or a real `TempDir` layout.

mod native;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use native::NativeRuntime;

use std::path::{Path, PathBuf};

/// Result type for runtime operations
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Errors that can occur during runtime operations
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File exists but is not valid UTF-8
    #[error("File is not valid UTF-8: {0}")]
    InvalidUtf8(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),
}

/// Read-only filesystem access used by the resolver.
///
/// Implementations must be cheap to call repeatedly: a single resolution
/// performs one or two probes per directory level while locating the
/// config, plus up to five probes per candidate path.
pub trait Runtime: Send + Sync + std::fmt::Debug {
    /// Check if a path exists and is a regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Read a whole file as UTF-8 text
    fn read_to_string(&self, path: &Path) -> RuntimeResult<String>;
}
