//! Miette diagnostic conversion for CLI errors.

use miette::Report;
use stylenav::NavigateError;

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Unresolved(unresolved) => miette::miette!(
            help = "Check the specifier, or run `stylenav aliases` on the importing directory",
            "{}",
            unresolved.diagnostic()
        ),
        CliError::Navigate(NavigateError::NoImport { line }) => miette::miette!(
            help = "Only `import x from \"….module.css\"` and `import \"….module.css\"` are recognized",
            "no style module import found on this line: {}",
            line
        ),
        CliError::Config(e) => miette::miette!(
            help = "Check stylenav.toml and STYLENAV_* environment variables",
            "Configuration error: {}",
            e
        ),
        CliError::FileNotFound(path) => miette::miette!(
            help = "Paths are resolved against the current directory",
            "File not found: {}",
            path.display()
        ),
        _ => miette::miette!("{}", err),
    }
}
