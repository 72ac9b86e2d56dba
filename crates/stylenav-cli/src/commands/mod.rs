//! Command implementations for the stylenav CLI.
//!
//! - [`resolve`] - resolve a specifier from a file
//! - [`line`] - resolve the import on a line of a file
//! - [`aliases`] - show the alias map for a directory
//!
//! Each command exposes an `execute` function taking its arguments and the
//! merged settings.

pub mod aliases;
pub mod line;
pub mod resolve;
pub(crate) mod utils;

pub use aliases::execute as aliases_execute;
pub use line::execute as line_execute;
pub use resolve::execute as resolve_execute;

use stylenav_config::{NavigatorSettings, SettingsDiscovery, SettingsOverrides};

use crate::cli::Cli;
use crate::error::Result;

/// Merge defaults, `stylenav.toml`, `STYLENAV_*` and the command line.
pub fn load_settings(cli: &Cli) -> Result<NavigatorSettings> {
    let cwd = utils::get_cwd()?;
    let roots = cli.command.workspace_roots();

    let overrides = SettingsOverrides {
        lenient_relative: cli.command.strict().then_some(false),
        log_level: None,
        workspace_roots: (!roots.is_empty()).then(|| {
            roots
                .iter()
                .map(|root| utils::resolve_path(root, &cwd))
                .collect()
        }),
    };
    let explicit = cli
        .config
        .as_deref()
        .map(|path| utils::resolve_path(path, &cwd));

    Ok(SettingsDiscovery::new(&cwd).load(explicit.as_deref(), &overrides)?)
}
