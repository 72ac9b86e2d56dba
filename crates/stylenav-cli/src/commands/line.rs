//! Line command implementation.

use stylenav::{NativeRuntime, Runtime, RuntimeError};
use tracing::debug;

use crate::cli::LineArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};
use stylenav_config::NavigatorSettings;

/// Execute the line command.
///
/// Reads `args.file`, takes the 1-based line `args.line`, and resolves the
/// style module import on it.
///
/// # Errors
///
/// - `CliError::FileNotFound` when the file does not exist
/// - `CliError::InvalidArgument` when the line is past the end of the file
/// - `CliError::Navigate` when the line holds no style module import
/// - `CliError::Unresolved` when no stylesheet matches
pub fn execute(args: LineArgs, settings: &NavigatorSettings) -> Result<()> {
    let cwd = utils::get_cwd()?;
    let file = utils::resolve_path(&args.file, &cwd);

    let source = NativeRuntime::new()
        .read_to_string(&file)
        .map_err(|err| match err {
            RuntimeError::FileNotFound(path) => CliError::FileNotFound(path),
            other => other.into(),
        })?;

    let index = (args.line as usize).saturating_sub(1);
    let text = source.lines().nth(index).ok_or_else(|| {
        CliError::InvalidArgument(format!(
            "line {} is past the end of {} ({} lines)",
            args.line,
            file.display(),
            source.lines().count()
        ))
    })?;
    debug!("[stylenav] line {}: {}", args.line, text.trim());

    let workspace = utils::workspace_for(settings, &cwd, &file);
    let path = utils::navigator(settings)
        .navigate_line(text, &file, &workspace)?
        .into_result()?;

    println!("{}", path.display());
    Ok(())
}
