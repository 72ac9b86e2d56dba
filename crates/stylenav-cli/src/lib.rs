//! Command-line interface for `stylenav`.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - `resolve`, `line` and `aliases`
//! - [`error`] - error types and miette conversion
//! - [`logger`] - `tracing` subscriber setup
//! - [`ui`] - status messages on stderr
//!
//! Results go to stdout, everything else to stderr, so the output of
//! `stylenav resolve` can be piped straight into an editor.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
