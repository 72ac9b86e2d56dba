//! # stylenav
//!
//! Jump from a CSS-module import to the stylesheet it names.
//!
//! Given an import line such as
//!
//! ```text
//! import styles from "@/components/Button.module.css";
//! ```
//!
//! and the file it appears in, `stylenav` finds the absolute path of the
//! stylesheet on disk. Resolution runs in three stages:
//!
//! ```text
//!  current dir ──► ConfigLocator ──► tsconfig.json / jsconfig.json
//!                                         │
//!                                         ▼
//!                                   AliasMapBuilder ──► AliasMap
//!                                                          │
//!  specifier ─────────────────────────► ImportResolver ◄───┘
//!                                         │
//!                                         ▼
//!                                 Option<PathBuf>
//! ```
//!
//! - [`ConfigLocator`] walks up from the importing directory to the nearest
//!   config file, never leaving the workspace root.
//! - [`AliasMapBuilder`] parses the config leniently (comments and trailing
//!   commas are accepted) and turns `compilerOptions.paths` into an
//!   [`AliasMap`].
//! - [`ImportResolver`] tries relative resolution, then every matching
//!   alias from longest to shortest, probing the `.module.css`,
//!   `.module.scss`, `.module.sass` and `index.module.css` candidates.
//!
//! [`Navigator`] runs all three per call, so config edits are seen
//! immediately.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stylenav::Navigator;
//! use std::path::Path;
//!
//! let navigator = Navigator::native();
//! let result = navigator
//!     .navigate_line(
//!         r#"import styles from "@/styles/home.module.scss";"#,
//!         Path::new("/ws/app/src/pages/Home.tsx"),
//!         Path::new("/ws"),
//!     )
//!     .expect("line holds a style import");
//!
//! match result.into_result() {
//!     Ok(path) => println!("{}", path.display()),
//!     Err(unresolved) => eprintln!("{}", unresolved.diagnostic()),
//! }
//! ```
//!
//! ## Filesystem access
//!
//! Every probe and read goes through the [`Runtime`] trait. [`NativeRuntime`]
//! talks to the real filesystem; with the `test-utils` feature,
//! `runtime::test_utils::MemoryRuntime` serves an in-memory tree.

pub mod aliases;
pub mod config;
pub mod error;
pub mod extract;
pub mod locator;
pub mod navigator;
pub mod observer;
pub mod resolver;
pub mod runtime;
pub mod workspace;

#[cfg(test)]
mod tests;

pub use aliases::{AliasMap, AliasMapBuilder};
pub use config::{ConfigLoadError, ProjectConfig};
pub use error::{NavigateError, Unresolved};
pub use extract::{ImportSpecifier, SpecifierKind, StyleFlavor, extract_import, extract_import_at};
pub use locator::{CONFIG_FILE_NAMES, ConfigLocation, ConfigLocator};
pub use navigator::{Navigator, ResolveResult};
pub use observer::{NoopObserver, ResolveObserver, TracingObserver};
pub use resolver::{ImportResolver, ResolveOptions};
pub use runtime::{NativeRuntime, Runtime, RuntimeError, RuntimeResult};
pub use workspace::select_workspace_root;
