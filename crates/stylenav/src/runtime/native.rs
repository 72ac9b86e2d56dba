//! Native Runtime Implementation
//!
//! Wraps `std::fs` behind the [`Runtime`] trait so the resolution pipeline
//! stays independent of where files actually live.
//!
//! ```text
//! ┌─────────────────────┐
//! │ NativeRuntime       │
//! │  .is_file()         │────▶ std::path::Path::is_file()
//! │  .read_to_string()  │────▶ std::fs::read_to_string()
//! └─────────────────────┘
//! ```

// The only module allowed to call std::fs directly.
#![allow(clippy::disallowed_methods)]

use std::io::ErrorKind;
use std::path::Path;

use super::{Runtime, RuntimeError, RuntimeResult};

/// Native filesystem Runtime implementation using `std::fs`.
///
/// # Example
///
/// ```rust,no_run
/// use stylenav::runtime::{NativeRuntime, Runtime};
/// use std::path::Path;
///
/// let runtime = NativeRuntime::new();
/// let has_config = runtime.is_file(Path::new("tsconfig.json"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NativeRuntime;

impl NativeRuntime {
    /// Create a new NativeRuntime instance.
    pub fn new() -> Self {
        Self
    }
}

impl Default for NativeRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime for NativeRuntime {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> RuntimeResult<String> {
        std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RuntimeError::FileNotFound(path.to_path_buf()),
            ErrorKind::InvalidData => RuntimeError::InvalidUtf8(path.to_path_buf()),
            _ => RuntimeError::Io(e.to_string()),
        })
    }
}
