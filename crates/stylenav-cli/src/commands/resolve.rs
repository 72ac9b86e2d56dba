//! Resolve command implementation.

use tracing::debug;

use crate::cli::ResolveArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};
use stylenav_config::NavigatorSettings;

/// Execute the resolve command.
///
/// Prints the resolved path on stdout.
///
/// # Errors
///
/// `CliError::Unresolved` when no stylesheet matches.
pub fn execute(args: ResolveArgs, settings: &NavigatorSettings) -> Result<()> {
    let cwd = utils::get_cwd()?;
    let from = utils::resolve_path(&args.from, &cwd);
    let current_dir = from.parent().ok_or_else(|| {
        CliError::InvalidArgument(format!("--from has no parent directory: {}", from.display()))
    })?;
    let workspace = utils::workspace_for(settings, &cwd, &from);
    debug!("[stylenav] workspace root: {}", workspace.display());

    let path = utils::navigator(settings)
        .navigate(&args.specifier, current_dir, &workspace)
        .into_result()?;

    println!("{}", path.display());
    Ok(())
}
